//! Reconcile template usage with the library catalog.

use std::collections::BTreeSet;

use super::catalog::Catalog;
use super::naming::{component_name, directive_name};
use super::template::TemplateUsage;

/// Raw identifiers merged across every scanned file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupUsage {
    pub components: BTreeSet<String>,
    pub directives: BTreeSet<String>,
}

impl MarkupUsage {
    pub fn merge(&mut self, usage: TemplateUsage) {
        self.components.extend(usage.components);
        self.directives.extend(usage.directives);
    }
}

impl FromIterator<TemplateUsage> for MarkupUsage {
    fn from_iter<I: IntoIterator<Item = TemplateUsage>>(iter: I) -> Self {
        let mut merged = Self::default();
        for usage in iter {
            merged.merge(usage);
        }
        merged
    }
}

/// Catalog names in use, sorted and free of duplicates.
///
/// Every entry is a member of the corresponding catalog set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageResult {
    pub components: BTreeSet<String>,
    pub directives: BTreeSet<String>,
}

impl UsageResult {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.directives.is_empty()
    }
}

/// Normalize raw identifiers and keep those the catalog exports.
///
/// Components and directives are matched only against their own category.
pub fn match_usage(usage: &MarkupUsage, catalog: &Catalog, directive_marker: char) -> UsageResult {
    UsageResult {
        components: match_components(&usage.components, catalog),
        directives: match_directives(&usage.directives, catalog, directive_marker),
    }
}

pub fn match_components<'a>(
    raw: impl IntoIterator<Item = &'a String>,
    catalog: &Catalog,
) -> BTreeSet<String> {
    raw.into_iter()
        .map(|name| component_name(name))
        .filter(|name| catalog.has_component(name))
        .collect()
}

pub fn match_directives<'a>(
    raw: impl IntoIterator<Item = &'a String>,
    catalog: &Catalog,
    marker: char,
) -> BTreeSet<String> {
    raw.into_iter()
        .map(|name| directive_name(name, marker))
        .filter(|name| catalog.has_directive(name))
        .collect()
}

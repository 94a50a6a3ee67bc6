//! The authoritative set of names the library exports.
//!
//! Built by reading the library's sources as data:
//!
//! - `components`: string constants from the component declarations file
//! - `directives`: named exports of each directive's entry file

use std::{collections::BTreeSet, path::Path};

use anyhow::Result;

use super::library::LibraryProfile;

pub mod components;
pub mod directives;

pub use components::{collect_component_names, load_components};
pub use directives::{collect_named_exports, find_directive_entry_files, load_directives};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub components: BTreeSet<String>,
    pub directives: BTreeSet<String>,
}

impl Catalog {
    pub fn new<C, D>(components: C, directives: D) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
            directives: directives.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the catalog from an installed copy of the library.
    pub fn load(library_root: &Path, profile: &LibraryProfile) -> Result<Self> {
        let components = load_components(library_root, profile)?;
        let directives = load_directives(library_root, profile)?;
        Ok(Self::new(components, directives))
    }

    pub fn has_component(&self, name: &str) -> bool {
        self.components.contains(name)
    }

    pub fn has_directive(&self, name: &str) -> bool {
        self.directives.contains(name)
    }
}

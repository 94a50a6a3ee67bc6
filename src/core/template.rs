//! Component and directive usage of a single template.
//!
//! Classification follows Vue's template compiler: a tag is a component when
//! it is capitalized or not a native element, and an attribute is a custom
//! directive when it is a `v-` attribute that the compiler does not handle
//! itself.

use anyhow::Result;

use super::html_tags::{
    is_builtin_component, is_builtin_directive, is_native_tag, is_structural_directive,
};
use super::parsers::markup::{Element, parse_markup};

/// Static `is` value that turns a native element into a component.
const VUE_IS_PREFIX: &str = "vue:";

/// Identifiers referenced by one template, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateUsage {
    pub components: Vec<String>,
    pub directives: Vec<String>,
}

impl TemplateUsage {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.directives.is_empty()
    }

    fn add_component(&mut self, name: &str) {
        if !self.components.iter().any(|c| c == name) {
            self.components.push(name.to_string());
        }
    }

    fn add_directive(&mut self, name: &str) {
        if !self.directives.iter().any(|d| d == name) {
            self.directives.push(name.to_string());
        }
    }
}

/// Parse a single-file component and collect the usage of its template.
///
/// A file without a root `<template>` block uses nothing.
pub fn extract_usage(source: &str) -> Result<TemplateUsage> {
    let document = parse_markup(source)?;
    Ok(document
        .template()
        .map(analyze_template)
        .unwrap_or_default())
}

/// Collect usage below a root `<template>` element.
///
/// The root element's own attributes (`lang`, `functional`) are block
/// attributes, not directives.
pub fn analyze_template(template: &Element) -> TemplateUsage {
    let mut usage = TemplateUsage::default();
    if template.has_attribute("v-pre") {
        return usage;
    }
    for child in template.child_elements() {
        visit_element(child, &mut usage);
    }
    usage
}

fn visit_element(element: &Element, usage: &mut TemplateUsage) {
    // Nothing under `v-pre` is compiled.
    if element.has_attribute("v-pre") {
        return;
    }

    if let Some(component) = component_tag(element) {
        usage.add_component(component);
    }

    if collects_directives(element) {
        for attribute in &element.attributes {
            if let Some(name) = custom_directive_name(&attribute.name) {
                usage.add_directive(name);
            }
        }
    }

    for child in element.child_elements() {
        visit_element(child, usage);
    }
}

/// The component an element resolves to, if any.
fn component_tag(element: &Element) -> Option<&str> {
    let tag = element.tag.as_str();

    if matches!(tag, "slot" | "template" | "component") || is_builtin_component(tag) {
        return None;
    }

    if let Some(name) = element
        .attribute("is")
        .and_then(|attr| attr.value.as_deref())
        .and_then(|value| value.strip_prefix(VUE_IS_PREFIX))
        .filter(|name| !name.is_empty())
    {
        return Some(name);
    }

    if tag.starts_with(|c: char| c.is_ascii_uppercase()) || !is_native_tag(tag) {
        return Some(tag);
    }

    None
}

/// Vue does not build directives for `<slot>` outlets or fragment `<template>`s.
fn collects_directives(element: &Element) -> bool {
    match element.tag.as_str() {
        "slot" => false,
        "template" => !element
            .attributes
            .iter()
            .any(|attr| is_fragment_attribute(&attr.name)),
        _ => true,
    }
}

fn is_fragment_attribute(name: &str) -> bool {
    name.starts_with('#') || directive_name(name).is_some_and(is_structural_directive)
}

/// Name part of a `v-` attribute: `v-b-tooltip:top.hover` -> `b-tooltip`.
fn directive_name(attribute: &str) -> Option<&str> {
    let rest = attribute.strip_prefix("v-")?;
    let end = rest.find([':', '.']).unwrap_or(rest.len());
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}

fn custom_directive_name(attribute: &str) -> Option<&str> {
    directive_name(attribute).filter(|name| !is_builtin_directive(name))
}

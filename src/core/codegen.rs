//! Render matched names into registration code.
//!
//! ```js
//! import Vue from 'vue';
//! import { BButton, VBToggle } from 'bootstrap-vue';
//!
//! Vue.component('BButton', BButton);
//!
//! Vue.directive('b-toggle', VBToggle);
//! ```

use super::library::LibraryProfile;
use super::matcher::UsageResult;
use super::naming::registered_directive_name;

pub const DEFAULT_WRAP_LIMIT: usize = 80;
pub const DEFAULT_INDENT_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Longest single-line import statement before it is wrapped.
    pub wrap_limit: usize,
    /// Spaces per indent level in a wrapped import.
    pub indent_size: usize,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            wrap_limit: DEFAULT_WRAP_LIMIT,
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }
}

/// Generate the registration module, or `None` when nothing is used.
pub fn generate(
    usage: &UsageResult,
    profile: &LibraryProfile,
    options: &CodegenOptions,
) -> Option<String> {
    if usage.is_empty() {
        return None;
    }

    let imported: Vec<&str> = usage
        .components
        .iter()
        .chain(&usage.directives)
        .map(String::as_str)
        .collect();

    let mut out = format!(
        "import {} from '{}';\n",
        profile.runtime_binding, profile.runtime_module
    );
    out.push_str(&import_statement(&imported, profile.package, options));
    out.push_str("\n\n");

    for component in &usage.components {
        out.push_str(&format!(
            "{}.component('{}', {});\n",
            profile.runtime_binding, component, component
        ));
    }

    if !usage.directives.is_empty() {
        if !usage.components.is_empty() {
            out.push('\n');
        }
        for directive in &usage.directives {
            out.push_str(&format!(
                "{}.directive('{}', {});\n",
                profile.runtime_binding,
                registered_directive_name(directive, profile.directive_marker),
                directive
            ));
        }
    }

    Some(out)
}

/// `import { A, B } from 'pkg';`, wrapped one name per line when longer
/// than the wrap limit. No trailing newline.
pub fn import_statement(names: &[&str], package: &str, options: &CodegenOptions) -> String {
    let single_line = format!("import {{ {} }} from '{}';", names.join(", "), package);
    if single_line.chars().count() <= options.wrap_limit {
        return single_line;
    }

    let indent = " ".repeat(options.indent_size);
    let mut wrapped = String::from("import {\n");
    for name in names {
        wrapped.push_str(&format!("{indent}{name},\n"));
    }
    wrapped.push_str(&format!("}} from '{}';", package));
    wrapped
}

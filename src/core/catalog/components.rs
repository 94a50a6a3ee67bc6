//! Component names declared by the library.
//!
//! The declarations file is a flat list of exported string constants:
//!
//! ```js
//! export const NAME_ALERT = 'BAlert'
//! export const NAME_BADGE = 'BBadge'
//! ```
//!
//! The literal values are the component names.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use swc_ecma_ast::{Decl, Expr, Lit, Module, ModuleDecl, ModuleItem, Pat, VarDeclarator};

use crate::core::library::LibraryProfile;
use crate::core::parsers::script::parse_module_source;

/// Read and parse the library's component declarations file.
pub fn load_components(library_root: &Path, profile: &LibraryProfile) -> Result<Vec<String>> {
    let path = profile.components_path(library_root);
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read component declarations: {}", path.display()))?;
    let module = parse_module_source(source, &path)?;

    let names = collect_component_names(&module)
        .with_context(|| format!("Unexpected structure in {}", path.display()))?;
    if names.is_empty() {
        bail!("No components declared in {}", path.display());
    }
    Ok(names)
}

/// Collect the string values of every exported constant, in file order.
pub fn collect_component_names(module: &Module) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for item in &module.body {
        let ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) = item else {
            bail!("expected only exported declarations at the top level");
        };
        let Decl::Var(var) = &export.decl else {
            bail!("expected only exported variable declarations at the top level");
        };
        for declarator in &var.decls {
            names.push(declarator_string_value(declarator)?);
        }
    }

    Ok(names)
}

fn declarator_string_value(declarator: &VarDeclarator) -> Result<String> {
    let binding = match &declarator.name {
        Pat::Ident(ident) => ident.id.sym.to_string(),
        _ => "<pattern>".to_string(),
    };

    match declarator.init.as_deref() {
        Some(Expr::Lit(Lit::Str(s))) => s
            .value
            .as_str()
            .map(str::to_string)
            .with_context(|| format!("`{}` is not a valid UTF-8 string", binding)),
        _ => bail!("`{}` is not initialized with a string literal", binding),
    }
}

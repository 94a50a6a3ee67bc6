//! Directive names exported by the library.
//!
//! Each directive lives in its own folder and its public entry point is the
//! file named after that folder (`directives/tooltip/tooltip.js`). Other files
//! in the folder are helpers and are never treated as exports.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use swc_ecma_ast::{Decl, Module, ModuleDecl, ModuleItem, Pat};
use walkdir::WalkDir;

use crate::core::library::LibraryProfile;
use crate::core::parsers::script::parse_module_source;

/// Read every directive entry file and collect its named exports.
pub fn load_directives(library_root: &Path, profile: &LibraryProfile) -> Result<BTreeSet<String>> {
    let directives_dir = profile.directives_path(library_root);
    let mut names = BTreeSet::new();

    for path in find_directive_entry_files(&directives_dir, profile.source_extension)? {
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read directive source: {}", path.display()))?;
        let module = parse_module_source(source, &path)?;
        names.extend(collect_named_exports(&module));
    }

    Ok(names)
}

/// Files exactly one level below `directives_dir` whose stem equals the
/// name of the folder they are in.
pub fn find_directive_entry_files(directives_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !directives_dir.is_dir() {
        bail!(
            "Directives directory not found: {}",
            directives_dir.display()
        );
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(directives_dir)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.with_context(|| {
            format!("Failed to list directives in {}", directives_dir.display())
        })?;
        if entry.file_type().is_file() && is_entry_file(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_entry_file(path: &Path, extension: &str) -> bool {
    let has_extension = path.extension().is_some_and(|ext| ext == extension);
    let stem = path.file_stem();
    let folder = path.parent().and_then(Path::file_name);

    has_extension && stem.is_some() && stem == folder
}

/// Identifiers declared by top-level `export const|let|var|function|class`.
///
/// Default exports and export lists (`export { a }`, `export * from`) declare
/// nothing and are skipped.
pub fn collect_named_exports(module: &Module) -> Vec<String> {
    let mut names = Vec::new();

    for item in &module.body {
        let ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) = item else {
            continue;
        };
        match &export.decl {
            Decl::Var(var) => {
                for declarator in &var.decls {
                    if let Pat::Ident(ident) = &declarator.name {
                        names.push(ident.id.sym.to_string());
                    }
                }
            }
            Decl::Fn(function) => names.push(function.ident.sym.to_string()),
            Decl::Class(class) => names.push(class.ident.sym.to_string()),
            _ => {}
        }
    }

    names
}

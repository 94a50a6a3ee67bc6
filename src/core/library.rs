//! Conventions of the target component library and discovery of its root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Fixed layout and naming conventions of a component library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryProfile {
    /// npm package name, also the module specifier of the generated import.
    pub package: &'static str,
    /// Dependency folder the package is installed under.
    pub dependency_dir: &'static str,
    /// Declarations file exporting `const NAME = 'ComponentName'` bindings.
    pub components_file: &'static str,
    /// Directory holding one sub-directory per directive.
    pub directives_dir: &'static str,
    /// Extension of the directive source files.
    pub source_extension: &'static str,
    /// Prefix carried by every exported directive identifier.
    pub directive_marker: char,
    /// Identifier of the runtime the registrations are made on.
    pub runtime_binding: &'static str,
    /// Module the runtime binding is imported from.
    pub runtime_module: &'static str,
}

pub const BOOTSTRAP_VUE: LibraryProfile = LibraryProfile {
    package: "bootstrap-vue",
    dependency_dir: "node_modules",
    components_file: "src/constants/components.js",
    directives_dir: "src/directives",
    source_extension: "js",
    directive_marker: 'V',
    runtime_binding: "Vue",
    runtime_module: "vue",
};

impl Default for LibraryProfile {
    fn default() -> Self {
        BOOTSTRAP_VUE
    }
}

impl LibraryProfile {
    pub fn components_path(&self, library_root: &Path) -> PathBuf {
        library_root.join(self.components_file)
    }

    pub fn directives_path(&self, library_root: &Path) -> PathBuf {
        library_root.join(self.directives_dir)
    }

    /// Whether `dir` looks like an installed copy of the library.
    pub fn is_library_root(&self, dir: &Path) -> bool {
        self.components_path(dir).is_file()
    }
}

/// Walk up from `start` until a directory containing
/// `<dependency_dir>/<package>` is found and return that package directory.
pub fn locate_library_root(start: &Path, profile: &LibraryProfile) -> Result<PathBuf> {
    let start = start
        .canonicalize()
        .with_context(|| format!("Cannot resolve path: {}", start.display()))?;

    for dir in start.ancestors() {
        let candidate = dir.join(profile.dependency_dir).join(profile.package);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }

    bail!(
        "Cannot find \"{}/{}\" above {}; pass the path to the {} package as the second argument",
        profile.dependency_dir,
        profile.package,
        start.display(),
        profile.package
    )
}

/// Resolve the library root from an explicit path or by searching upward
/// from the markup root.
///
/// An explicit path may point at the package itself or at the dependency
/// folder that contains it.
pub fn resolve_library_root(
    explicit: Option<&Path>,
    markup_root: &Path,
    profile: &LibraryProfile,
) -> Result<PathBuf> {
    let Some(path) = explicit else {
        return locate_library_root(markup_root, profile);
    };

    if !path.is_dir() {
        bail!(
            "Library path does not exist or is not a directory: {}",
            path.display()
        );
    }

    let nested = path.join(profile.package);
    if !profile.is_library_root(path) && nested.is_dir() {
        return Ok(nested);
    }

    Ok(path.to_path_buf())
}

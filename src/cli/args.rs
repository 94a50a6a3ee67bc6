//! CLI argument definitions using clap.
//!
//! The interface is positional only:
//!
//! ```text
//! bvtrim <MARKUP_ROOT> [LIBRARY_ROOT] [WRAP_LIMIT] [INDENT_SIZE]
//! ```
//!
//! Optional arguments fall back to `.bvtrimrc.json` and then to defaults.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory containing the .vue files to scan
    pub markup_root: PathBuf,

    /// bootstrap-vue package root, or the node_modules folder containing it
    /// (default: searched upward from MARKUP_ROOT)
    pub library_root: Option<OsString>,

    /// Maximum width of a single-line import before it is wrapped (default: 80)
    pub wrap_limit: Option<usize>,

    /// Spaces per indent level in a wrapped import (default: 2)
    pub indent_size: Option<usize>,
}

impl Arguments {
    /// Explicit library root; an empty argument means "search for it".
    pub fn library_root(&self) -> Option<&Path> {
        self.library_root
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(Path::new)
    }
}

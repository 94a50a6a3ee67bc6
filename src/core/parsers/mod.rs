//! File parsers for component markup and library sources.
//!
//! This module provides parsers for the two input grammars:
//! - `markup`: Vue single-file components (element tree of the template)
//! - `script`: library ES modules (uses swc for AST generation)

pub mod markup;
pub mod script;

//! bvtrim - generate minimal bootstrap-vue registration code
//!
//! bvtrim scans the templates of a Vue project, finds which bootstrap-vue
//! components and directives they use, and prints a module that imports and
//! registers exactly those, instead of installing the whole library.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, settings, output)
//! - `config`: `.bvtrimrc.json` loading and parsing
//! - `core`: Catalog loading, template analysis, matching and code generation

pub mod cli;
pub mod config;
pub mod core;

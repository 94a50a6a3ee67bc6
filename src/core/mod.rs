//! Usage detection and import generation.
//!
//! The pipeline has four stages that only exchange plain data:
//!
//! 1. **Template parsing** (`parsers::markup`, `template`): which tags and
//!    directives each `.vue` file references
//! 2. **Catalog** (`catalog`): which components and directives the library
//!    exports, read from its own sources with swc
//! 3. **Matching** (`matcher`, `naming`): normalize the raw names and keep
//!    those present in the catalog
//! 4. **Codegen** (`codegen`): render the import and registration statements
//!
//! `library` and `file_scanner` locate the inputs; `pipeline` runs the stages
//! in order.

pub mod catalog;
pub mod codegen;
pub mod file_scanner;
pub mod html_tags;
pub mod library;
pub mod matcher;
pub mod naming;
pub mod parsers;
pub mod pipeline;
pub mod template;

pub use catalog::Catalog;
pub use codegen::{CodegenOptions, generate};
pub use library::{BOOTSTRAP_VUE, LibraryProfile};
pub use matcher::{MarkupUsage, UsageResult, match_usage};
pub use pipeline::{PipelineOptions, PipelineResult, run_pipeline};
pub use template::{TemplateUsage, extract_usage};

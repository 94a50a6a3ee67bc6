//! Resolve settings from arguments, config file and defaults, then run the
//! pipeline.
//!
//! Precedence is positional argument, then `.bvtrimrc.json`, then built-in
//! default.

use std::path::PathBuf;

use anyhow::Result;

use super::{args::Arguments, report};
use crate::config::{load_config, verbose_from_env};
use crate::core::codegen::CodegenOptions;
use crate::core::library::{LibraryProfile, resolve_library_root};
use crate::core::pipeline::{PipelineOptions, PipelineResult, ensure_markup_root, run_pipeline};

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub options: PipelineOptions,
    /// Config file the settings were read from, `None` when using defaults.
    pub config_path: Option<PathBuf>,
}

pub struct RunOutcome {
    pub result: PipelineResult,
    pub verbose: bool,
}

pub fn run(args: Arguments, profile: &LibraryProfile) -> Result<RunOutcome> {
    let settings = resolve_settings(&args, profile)?;
    let verbose = settings.options.verbose;
    if verbose {
        report::print_settings(&settings);
    }

    let result = run_pipeline(&settings.options, profile)?;
    Ok(RunOutcome { result, verbose })
}

pub fn resolve_settings(args: &Arguments, profile: &LibraryProfile) -> Result<RunSettings> {
    let markup_root = args.markup_root.clone();
    ensure_markup_root(&markup_root)?;

    let loaded = load_config(&markup_root)?;

    let explicit_library = match args.library_root() {
        Some(path) => Some(path.to_path_buf()),
        None => loaded.library_root(),
    };
    let library_root = resolve_library_root(explicit_library.as_deref(), &markup_root, profile)?;

    let config = &loaded.config;
    let codegen = CodegenOptions {
        wrap_limit: args.wrap_limit.unwrap_or(config.wrap_limit),
        indent_size: args.indent_size.unwrap_or(config.indent_size),
    };

    Ok(RunSettings {
        options: PipelineOptions {
            markup_root,
            library_root,
            extensions: config.extensions.clone(),
            ignores: config.ignores.clone(),
            codegen,
            verbose: config.verbose || verbose_from_env(),
        },
        config_path: loaded.path,
    })
}

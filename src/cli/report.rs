//! Output of a run.
//!
//! Generated code is the only thing written to stdout so it can be redirected
//! straight into a file. Everything else goes to stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunSettings;
use crate::config::VERBOSE_ENV;
use crate::core::pipeline::PipelineResult;

pub fn print(result: &PipelineResult, package: &str, verbose: bool) {
    print_to(
        result,
        package,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<O: Write, E: Write>(
    result: &PipelineResult,
    package: &str,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.generated {
        Some(code) => {
            let _ = write!(out, "{}", code);
        }
        None => {
            let _ = writeln!(
                err,
                "{} no {} components or directives are used, nothing to generate",
                "note:".bold().cyan(),
                package
            );
        }
    }

    if verbose {
        print_summary_to(result, err);
    }
    print_skipped_warning_to(result.skipped_count, verbose, err);
}

pub fn print_settings(settings: &RunSettings) {
    print_settings_to(settings, &mut io::stderr().lock());
}

pub fn print_settings_to<W: Write>(settings: &RunSettings, writer: &mut W) {
    let options = &settings.options;
    let source = match &settings.config_path {
        Some(path) => format!("using config {}", path.display()),
        None => "no config file found, using defaults".to_string(),
    };
    let _ = writeln!(writer, "{} {}", "note:".bold().cyan(), source);
    let _ = writeln!(
        writer,
        "{} library root {}",
        "note:".bold().cyan(),
        options.library_root.display()
    );
    let _ = writeln!(
        writer,
        "{} wrap limit {}, indent size {}",
        "note:".bold().cyan(),
        options.codegen.wrap_limit,
        options.codegen.indent_size
    );
}

fn print_summary_to<W: Write>(result: &PipelineResult, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} catalog has {} component(s) and {} directive(s)",
        "note:".bold().cyan(),
        result.catalog_components,
        result.catalog_directives
    );
    let _ = writeln!(
        writer,
        "{} {} file(s) scanned, {} component(s) and {} directive(s) used",
        "note:".bold().cyan(),
        result.files_scanned,
        result.usage.components.len(),
        result.usage.directives.len()
    );
}

fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read (set {} for details)",
            "warning:".bold().yellow(),
            count,
            format!("{}=1", VERBOSE_ENV).cyan()
        );
    }
}

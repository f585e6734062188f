//! The deepget Command-Line Interface.
//!
//! This module is the main entry point for the CLI and orchestrates the core
//! library functions.

use std::io::{self, Read};
use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use log::debug;
use miette::{IntoDiagnostic, WrapErr};
use serde_json::Value;

use crate::cli::args::DeepGetArgs;
use crate::options::GetOptions;
use crate::path::Path;
use crate::resolve::resolve_strict;
use crate::PathError;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = DeepGetArgs::parse();
    let options = GetOptions { sep: args.sep };

    let result = if args.segments {
        handle_segments(&args.path, &options)
    } else {
        handle_get(&args.path, args.file, &options, args.raw)
    };

    if let Err(report) = result {
        output::print_error(report);
        process::exit(1);
    }
}

/// Looks up `path` in the JSON read from `file` or stdin.
fn handle_get(
    path: &str,
    file: Option<PathBuf>,
    options: &GetOptions,
    raw: bool,
) -> miette::Result<()> {
    let source = read_input(file)?;
    let subject: Value = serde_json::from_str(&source)
        .into_diagnostic()
        .wrap_err("input is not valid JSON")?;

    debug!("looking up `{path}` with separator `{}`", options.separator());
    let value = resolve_strict(&subject, path, options.separator())?;
    output::print_value(value, raw);
    Ok(())
}

/// Lists the segments `path` splits into.
fn handle_segments(path: &str, options: &GetOptions) -> miette::Result<()> {
    let parsed = Path::parse(path, options.separator()).ok_or(PathError::EmptyPath)?;
    output::print_segments(&parsed).into_diagnostic()
}

fn read_input(file: Option<PathBuf>) -> miette::Result<String> {
    match file {
        Some(file) => fs::read_to_string(&file)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", file.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .into_diagnostic()
                .wrap_err("failed to read stdin")?;
            Ok(source)
        }
    }
}

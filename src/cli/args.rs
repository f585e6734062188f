//! Defines the command-line arguments for the deepget CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "deepget",
    version,
    about = "Look up values in JSON documents with dot-notation paths."
)]
pub struct DeepGetArgs {
    /// The path to look up, e.g. `a.b.c[1].d`.
    #[arg(required = true)]
    pub path: String,
    /// The JSON file to read. Reads stdin when omitted.
    pub file: Option<PathBuf>,
    /// Custom key separator. An empty separator means the default.
    #[arg(short, long)]
    pub sep: Option<String>,
    /// Print string values without JSON quoting.
    #[arg(short, long)]
    pub raw: bool,
    /// List how the path splits into segments instead of looking it up.
    #[arg(long, conflicts_with_all = ["file", "raw"])]
    pub segments: bool,
}

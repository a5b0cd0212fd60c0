//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - build: gather, index and colophon in one go
//! - gather: write the tools.json manifest
//! - index: render index.html from the manifest and copy tools
//! - colophon: render colophon.html from git history

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolsite - build a static index for a directory of HTML tools
#[derive(Parser, Debug)]
#[command(name = "toolsite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing the tool files (default: current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Output directory (default: dist)
    #[arg(short, long, global = true)]
    pub out: Option<PathBuf>,

    /// Never call the LLM for missing descriptions
    #[arg(long, global = true)]
    pub no_llm: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run every stage: gather, index, colophon
    Build,

    /// Collect tool metadata into the manifest
    Gather,

    /// Render index.html from the manifest and copy tool files
    Index,

    /// Render colophon.html from git history
    Colophon {
        /// Maximum number of commits to list
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

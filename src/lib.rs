//! toolsite - static site generator for a directory of single-file HTML tools
//!
//! Scans `<name>.html` tool files and their optional `<name>.docs.md` metadata,
//! writes a `tools.json` manifest, and renders an index page plus a colophon
//! built from git history.

pub mod collector;
pub mod config;
pub mod domain;
pub mod error;
pub mod history;
pub mod llm;
pub mod render;
pub mod site;

pub use error::{Result, ToolsiteError};

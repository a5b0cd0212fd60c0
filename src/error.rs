//! Error types for toolsite
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// All error types that can occur while building the site
#[derive(Debug, Error)]
pub enum ToolsiteError {
    /// A required input file or directory does not exist
    #[error("Missing input: {}", .0.display())]
    MissingInput(PathBuf),

    /// Two tool files produced the same name
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),

    /// Site or tool configuration is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Template registration or rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// LLM API error
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for toolsite operations
pub type Result<T> = std::result::Result<T, ToolsiteError>;

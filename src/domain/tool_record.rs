//! Tool record and related types
//!
//! A ToolRecord is everything the renderers need to know about one tool file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Description used when neither the docs file nor the LLM supplied one
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// Display metadata for a single tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// File stem of the tool file, unique per build
    pub name: String,

    /// Page title, or a title derived from the file name
    pub title: String,

    /// Never empty
    pub description: String,

    /// Relative link to the tool file
    pub url: String,

    pub category: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Modification time of the tool file
    pub last_modified: DateTime<Utc>,

    /// Where the description came from
    pub description_source: DescriptionSource,
}

/// Origin of a tool's description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionSource {
    /// First paragraph line of the `.docs.md` file
    Docs,
    /// Produced by the LLM fallback
    Generated,
    /// The static placeholder
    Fallback,
}

impl ToolRecord {
    /// Create a record for a tool file named `<name>.html`
    pub fn new(name: impl Into<String>, title: impl Into<String>, last_modified: DateTime<Utc>) -> Self {
        let name = name.into();
        let url = format!("{}.html", name);
        Self {
            name,
            title: title.into(),
            description: FALLBACK_DESCRIPTION.to_string(),
            url,
            category: None,
            tags: Vec::new(),
            last_modified,
            description_source: DescriptionSource::Fallback,
        }
    }

    /// Set the description, keeping the fallback when `description` is blank
    pub fn with_description(mut self, description: impl Into<String>, source: DescriptionSource) -> Self {
        let description = description.into();
        let description = description.trim();
        if description.is_empty() {
            self.description = FALLBACK_DESCRIPTION.to_string();
            self.description_source = DescriptionSource::Fallback;
        } else {
            self.description = description.to_string();
            self.description_source = source;
        }
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

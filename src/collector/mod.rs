//! Collector: turns a directory of tool files into a BuildManifest.
//!
//! For each `<name>.html` the collector reads the page title, the optional
//! `<name>.docs.md` (front-matter plus first paragraph line), and, when the docs
//! yield no description, asks the DescriptionGenerator if one is configured.
//! Whatever still lacks a description gets the fallback literal.

mod discover;
mod docs;
mod title;

pub use discover::*;
pub use docs::*;
pub use title::*;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::domain::{BuildManifest, DescriptionSource, ToolRecord};
use crate::error::{Result, ToolsiteError};
use crate::llm::DescriptionGenerator;

/// Gathers tool records from a root directory
#[derive(Debug, Default)]
pub struct Collector {
    generator: Option<DescriptionGenerator>,
}

impl Collector {
    /// A collector that never calls an LLM
    pub fn new() -> Self {
        Self::default()
    }

    /// A collector that falls back to `generator` for missing descriptions
    pub fn with_generator(generator: DescriptionGenerator) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Scan `root` and build the manifest, one record per tool file
    pub async fn collect(&self, root: &Path) -> Result<BuildManifest> {
        let html_files = discover_tools(root)?;
        log::info!("Found {} tool(s) in {}", html_files.len(), root.display());

        let mut manifest = BuildManifest::default();
        for html_path in &html_files {
            let record = self.collect_tool(html_path).await?;
            log::debug!("{}: {:?} description", record.name, record.description_source);
            manifest.push(record)?;
        }
        Ok(manifest)
    }

    /// Build the record for a single tool file
    pub async fn collect_tool(&self, html_path: &Path) -> Result<ToolRecord> {
        let name = tool_name(html_path).ok_or_else(|| ToolsiteError::MissingInput(html_path.to_path_buf()))?;

        let bytes = fs::read(html_path)?;
        let html = String::from_utf8_lossy(&bytes);
        let title = extract_title(&html).unwrap_or_else(|| fallback_title(&name));
        let last_modified = modified_time(html_path)?;

        let docs = read_docs(&docs_path(html_path));
        let record = ToolRecord::new(&name, &title, last_modified)
            .with_category(docs.front_matter.category)
            .with_tags(docs.front_matter.tags);

        if let Some(description) = docs.description {
            return Ok(record.with_description(description, DescriptionSource::Docs));
        }

        match self.generate(&name, &title, &html).await {
            Some(description) => Ok(record.with_description(description, DescriptionSource::Generated)),
            None => Ok(record),
        }
    }

    async fn generate(&self, name: &str, title: &str, html: &str) -> Option<String> {
        let generator = self.generator.as_ref()?;
        log::info!("{}: no description in docs, asking the LLM", name);
        match generator.describe(title, html).await {
            Ok(Some(description)) => {
                log::info!("{}: LLM generated a description", name);
                Some(description)
            }
            Ok(None) => {
                log::warn!("{}: LLM returned an empty description", name);
                None
            }
            Err(e) => {
                log::warn!("{}: LLM generation failed: {}", name, e);
                None
            }
        }
    }
}

fn modified_time(path: &Path) -> Result<DateTime<Utc>> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}

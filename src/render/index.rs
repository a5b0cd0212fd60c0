//! Index page: one card per tool, optionally grouped by category.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Templates;
use crate::config::SiteConfig;
use crate::domain::{BuildManifest, ToolRecord};
use crate::error::Result;

/// Output file name of the index page
pub const INDEX_PAGE: &str = "index.html";

/// Heading for tools without a category when grouping is enabled
pub const UNCATEGORIZED: &str = "Other";

const TEMPLATE_NAME: &str = "index";
const TEMPLATE: &str = include_str!("templates/index.hbs");

#[derive(Debug, Serialize)]
struct IndexContext<'a> {
    site_title: &'a str,
    site_description: &'a str,
    repo_url: Option<&'a str>,
    has_tools: bool,
    tool_count: usize,
    groups: Vec<Group<'a>>,
}

#[derive(Debug, Serialize)]
struct Group<'a> {
    heading: Option<&'a str>,
    tools: Vec<ToolCard<'a>>,
}

#[derive(Debug, Serialize)]
struct ToolCard<'a> {
    name: &'a str,
    url: &'a str,
    title: &'a str,
    description: &'a str,
    category: Option<&'a str>,
    tags: &'a [String],
    updated: String,
}

impl<'a> From<&'a ToolRecord> for ToolCard<'a> {
    fn from(tool: &'a ToolRecord) -> Self {
        Self {
            name: &tool.name,
            url: &tool.url,
            title: &tool.title,
            description: &tool.description,
            category: tool.category.as_deref(),
            tags: &tool.tags,
            updated: tool.last_modified.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Renders `index.html` from a manifest
pub struct IndexRenderer {
    templates: Templates,
}

impl IndexRenderer {
    pub fn new() -> Result<Self> {
        let mut templates = Templates::new();
        templates.register(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { templates })
    }

    pub fn render(&self, site: &SiteConfig, manifest: &BuildManifest) -> Result<String> {
        let groups = if site.group_by_category {
            group_by_category(manifest)
        } else {
            vec![Group {
                heading: None,
                tools: manifest.tools().iter().map(ToolCard::from).collect(),
            }]
        };

        let context = IndexContext {
            site_title: &site.title,
            site_description: &site.description,
            repo_url: site.repo_url(),
            has_tools: !manifest.is_empty(),
            tool_count: manifest.len(),
            groups,
        };
        self.templates.render(TEMPLATE_NAME, &context)
    }
}

/// Categories alphabetically, uncategorized tools last; manifest order within a group
fn group_by_category(manifest: &BuildManifest) -> Vec<Group<'_>> {
    let mut categorized: BTreeMap<&str, Vec<ToolCard<'_>>> = BTreeMap::new();
    let mut other = Vec::new();

    for tool in manifest {
        match tool.category.as_deref() {
            Some(category) => categorized.entry(category).or_default().push(ToolCard::from(tool)),
            None => other.push(ToolCard::from(tool)),
        }
    }

    let mut groups: Vec<Group<'_>> = categorized
        .into_iter()
        .map(|(category, tools)| Group {
            heading: Some(category),
            tools,
        })
        .collect();

    if !other.is_empty() {
        groups.push(Group {
            heading: Some(UNCATEGORIZED),
            tools: other,
        });
    }
    groups
}

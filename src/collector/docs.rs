//! Metadata (`.docs.md`) parsing.
//!
//! A docs file is markdown with an optional YAML front-matter block:
//!
//! ```text
//! ---
//! category: text
//! tags: [json, diff]
//! ---
//! # JSON Diff
//!
//! Compare two JSON documents side by side.
//! ```

use std::fs;
use std::path::Path;

use serde_yaml::Value;

const DELIMITER: &str = "---";

/// Fields read from the front-matter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// Everything the collector takes from a docs file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsInfo {
    pub description: Option<String>,
    pub front_matter: FrontMatter,
}

/// Split `content` into front-matter and body.
///
/// Without a complete `---` block the front-matter is empty and the body is the
/// whole content. A block that does not parse as YAML is dropped.
pub fn parse_front_matter(content: &str) -> (FrontMatter, &str) {
    let Some((yaml, body)) = split_front_matter(content) else {
        return (FrontMatter::default(), content);
    };

    if yaml.trim().is_empty() {
        return (FrontMatter::default(), body);
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => (front_matter_from_value(&value), body),
        Err(e) => {
            log::warn!("Could not parse front-matter: {}", e);
            (FrontMatter::default(), body)
        }
    }
}

/// First non-empty line of `body` that is not a markdown heading or `---` rule
pub fn extract_description(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#') && *line != DELIMITER)
        .map(|line| line.to_string())
}

/// Read a docs file. A missing or unreadable file yields empty info.
pub fn read_docs(path: &Path) -> DocsInfo {
    if !path.exists() {
        return DocsInfo::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            return DocsInfo::default();
        }
    };

    let (front_matter, body) = parse_front_matter(content.trim_start_matches('\u{feff}'));
    DocsInfo {
        description: extract_description(body),
        front_matter,
    }
}

/// Locate the YAML text and the remaining body, if a front-matter block is present
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let yaml = &content[yaml_start..offset];
            let body = &content[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

fn front_matter_from_value(value: &Value) -> FrontMatter {
    let Value::Mapping(map) = value else {
        if !value.is_null() {
            log::warn!("Front-matter is not a mapping, ignoring it");
        }
        return FrontMatter::default();
    };

    let category = map.get("category").and_then(scalar_to_string);

    let tags = match map.get("tags") {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(Value::String(csv)) => csv
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect(),
        Some(other) => scalar_to_string(other).into_iter().collect(),
        None => Vec::new(),
    };

    FrontMatter { category, tags }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if s.is_empty() { None } else { Some(s) }
}

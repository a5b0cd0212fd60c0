//! Build manifest: the ordered tool records produced by one collection pass.
//!
//! The manifest is written to disk as a JSON array so the gather and render
//! stages can run as separate commands. It is rebuilt from scratch each time.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::tool_record::ToolRecord;
use crate::error::{Result, ToolsiteError};

/// Ordered, name-unique sequence of tool records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildManifest {
    tools: Vec<ToolRecord>,
}

impl BuildManifest {
    /// Build a manifest, rejecting duplicate tool names
    pub fn new(tools: Vec<ToolRecord>) -> Result<Self> {
        let mut manifest = Self::default();
        for tool in tools {
            manifest.push(tool)?;
        }
        Ok(manifest)
    }

    /// Append a record; fails if a record with the same name exists
    pub fn push(&mut self, tool: ToolRecord) -> Result<()> {
        if self.contains(&tool.name) {
            return Err(ToolsiteError::DuplicateTool(tool.name));
        }
        self.tools.push(tool);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&ToolRecord> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Serialize as pretty JSON with a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&self.tools)?;
        json.push('\n');
        Ok(json)
    }

    /// Parse a manifest from JSON, re-checking name uniqueness
    pub fn from_json(json: &str) -> Result<Self> {
        let tools: Vec<ToolRecord> = serde_json::from_str(json)?;
        Self::new(tools)
    }

    /// Write the manifest to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        log::info!("Wrote {} tool(s) to {}", self.len(), path.display());
        Ok(())
    }

    /// Read a manifest written by `save`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToolsiteError::MissingInput(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl<'a> IntoIterator for &'a BuildManifest {
    type Item = &'a ToolRecord;
    type IntoIter = std::slice::Iter<'a, ToolRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DescriptionSource;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn record(name: &str) -> ToolRecord {
        ToolRecord::new(name, name.to_uppercase(), Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap())
    }

    #[test]
    fn test_new_preserves_order() {
        let manifest = BuildManifest::new(vec![record("b"), record("a"), record("c")]).unwrap();
        let names: Vec<_> = manifest.tools().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = BuildManifest::new(vec![record("a"), record("b"), record("a")]);
        assert!(matches!(result, Err(ToolsiteError::DuplicateTool(name)) if name == "a"));
    }

    #[test]
    fn test_json_is_array_with_trailing_newline() {
        let manifest = BuildManifest::new(vec![record("a")]).unwrap();
        let json = manifest.to_json().unwrap();
        assert!(json.starts_with("[\n  {"));
        assert!(json.ends_with("]\n"));
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let manifest = BuildManifest::new(vec![record("a")]).unwrap();
        let single = serde_json::to_value(&manifest.tools()[0]).unwrap();
        let doubled = serde_json::to_string(&vec![single.clone(), single]).unwrap();
        assert!(matches!(
            BuildManifest::from_json(&doubled),
            Err(ToolsiteError::DuplicateTool(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("tools.json");
        let manifest = BuildManifest::new(vec![
            record("a").with_description("Alpha tool.", DescriptionSource::Docs),
            record("b").with_tags(vec!["x".to_string(), "y".to_string()]),
        ])
        .unwrap();

        manifest.save(&path).unwrap();
        let loaded = BuildManifest::load(&path).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_load_missing() {
        let temp = TempDir::new().unwrap();
        let result = BuildManifest::load(&temp.path().join("tools.json"));
        assert!(matches!(result, Err(ToolsiteError::MissingInput(_))));
    }
}

//! Tool file discovery.

use std::path::{Path, PathBuf};

use glob::{Pattern, glob};

use crate::error::{Result, ToolsiteError};

/// Generated pages that live next to the tools but are not tools themselves
pub const RESERVED_PAGES: &[&str] = &["index.html", "colophon.html"];

/// Suffix of the metadata file paired with `<name>.html`
pub const DOCS_SUFFIX: &str = ".docs.md";

/// Find every `*.html` tool file directly inside `root`, sorted by file name.
pub fn discover_tools(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ToolsiteError::MissingInput(root.to_path_buf()));
    }

    let escaped = Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/*.html", escaped);
    let entries = glob(&pattern).map_err(|e| ToolsiteError::Config(format!("Bad glob pattern {}: {}", pattern, e)))?;

    let mut tools = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ToolsiteError::Io(e.into()))?;
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            log::warn!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };
        if RESERVED_PAGES.contains(&file_name) {
            continue;
        }
        tools.push(path);
    }

    tools.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(tools)
}

/// Tool name for a tool file: the file stem
pub fn tool_name(html_path: &Path) -> Option<String> {
    html_path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Path of the `.docs.md` file paired with a tool file
pub fn docs_path(html_path: &Path) -> PathBuf {
    let name = tool_name(html_path).unwrap_or_default();
    html_path.with_file_name(format!("{}{}", name, DOCS_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "<html></html>").unwrap();
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        for name in ["zeta.html", "alpha.html", "index.html", "colophon.html", "notes.md", "beta.docs.md"] {
            touch(temp.path(), name);
        }
        fs::create_dir(temp.path().join("dir.html")).unwrap();

        let tools = discover_tools(temp.path()).unwrap();
        let names: Vec<_> = tools.iter().filter_map(|p| tool_name(p)).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_discover_ignores_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        touch(&temp.path().join("sub"), "nested.html");
        touch(temp.path(), "top.html");

        let tools = discover_tools(temp.path()).unwrap();
        assert_eq!(tools.len(), 1);
        assert!(tools[0].ends_with("top.html"));
    }

    #[test]
    fn test_discover_root_with_glob_characters() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tools [v2]");
        fs::create_dir(&root).unwrap();
        touch(&root, "a.html");

        assert_eq!(discover_tools(&root).unwrap().len(), 1);
    }

    #[test]
    fn test_discover_missing_root() {
        let temp = TempDir::new().unwrap();
        let result = discover_tools(&temp.path().join("nope"));
        assert!(matches!(result, Err(ToolsiteError::MissingInput(_))));
    }

    #[test]
    fn test_docs_path() {
        assert_eq!(docs_path(Path::new("site/json-diff.html")), PathBuf::from("site/json-diff.docs.md"));
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolsiteError};

/// Name of the per-site configuration file in the root directory
pub const SITE_CONFIG_FILE: &str = "_config.yml";

/// Generator configuration (how to build), loaded from `toolsite.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub enabled: bool,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_ms: u64,
    /// Bytes of tool HTML sent along with the title
    pub snippet_bytes: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 150,
            timeout_ms: 60000,
            snippet_bytes: 2000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub root_dir: PathBuf,
    pub out_dir: PathBuf,
    /// Relative paths resolve against `root_dir`
    pub manifest: PathBuf,
    pub commit_limit: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            out_dir: PathBuf::from("dist"),
            manifest: PathBuf::from("tools.json"),
            commit_limit: 50,
        }
    }
}

impl BuildConfig {
    pub fn manifest_path(&self) -> PathBuf {
        if self.manifest.is_absolute() {
            self.manifest.clone()
        } else {
            self.root_dir.join(&self.manifest)
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let project_name = env!("CARGO_PKG_NAME");

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ToolsiteError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| ToolsiteError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        log::info!("Loaded config from: {}", path.display());
        Ok(config)
    }
}

/// Site presentation settings, read from `<root>/_config.yml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub repo_url: Option<String>,
    pub group_by_category: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Tools".to_string(),
            description: "A collection of tools".to_string(),
            repo_url: None,
            group_by_category: false,
        }
    }
}

impl SiteConfig {
    /// Load `_config.yml` from the site root; a missing file yields defaults
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(SITE_CONFIG_FILE);
        if !path.exists() {
            log::info!("No {} in {}, using site defaults", SITE_CONFIG_FILE, root.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
            .map_err(|e| ToolsiteError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Parse site settings; an empty document yields defaults
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Repository URL without trailing slashes, if set and non-blank
    pub fn repo_url(&self) -> Option<&str> {
        self.repo_url.as_deref()
    }

    fn normalized(mut self) -> Self {
        self.repo_url = self
            .repo_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        self
    }
}

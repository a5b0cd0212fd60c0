//! SiteBuilder: the gather, index and colophon stages wired to the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::collector::Collector;
use crate::config::{BuildConfig, SiteConfig};
use crate::domain::BuildManifest;
use crate::error::{Result, ToolsiteError};
use crate::history::GitLog;
use crate::render::{COLOPHON_PAGE, ColophonRenderer, INDEX_PAGE, IndexRenderer};

/// Outcome of a full build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub tools: usize,
    pub commits: usize,
    pub files_written: Vec<PathBuf>,
}

/// Builds a site from a root directory of tools into an output directory
#[derive(Debug)]
pub struct SiteBuilder {
    root_dir: PathBuf,
    out_dir: PathBuf,
    manifest_path: PathBuf,
    commit_limit: usize,
    site: SiteConfig,
    collector: Collector,
}

impl SiteBuilder {
    pub fn new(build: &BuildConfig, site: SiteConfig) -> Self {
        Self {
            root_dir: build.root_dir.clone(),
            out_dir: build.out_dir.clone(),
            manifest_path: build.manifest_path(),
            commit_limit: build.commit_limit,
            site,
            collector: Collector::new(),
        }
    }

    pub fn with_collector(mut self, collector: Collector) -> Self {
        self.collector = collector;
        self
    }

    pub fn with_commit_limit(mut self, limit: usize) -> Self {
        self.commit_limit = limit;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Collect tool metadata and write the manifest
    pub async fn gather(&self) -> Result<BuildManifest> {
        let manifest = self.collector.collect(&self.root_dir).await?;
        manifest.save(&self.manifest_path)?;
        Ok(manifest)
    }

    /// Render the index from the manifest on disk and copy the tool files
    pub fn index(&self) -> Result<Vec<PathBuf>> {
        let manifest = BuildManifest::load(&self.manifest_path)?;
        self.index_manifest(&manifest)
    }

    /// Render the index for `manifest` and copy the tool files
    pub fn index_manifest(&self, manifest: &BuildManifest) -> Result<Vec<PathBuf>> {
        for tool in manifest {
            check_tool_url(&tool.name, &tool.url)?;
        }
        fs::create_dir_all(&self.out_dir)?;

        let html = IndexRenderer::new()?.render(&self.site, manifest)?;
        let index_path = self.out_dir.join(INDEX_PAGE);
        fs::write(&index_path, html)?;
        log::info!("Wrote index with {} tool(s) to {}", manifest.len(), index_path.display());

        let mut written = vec![index_path];
        for tool in manifest {
            written.push(self.copy_tool(&tool.url)?);
        }
        Ok(written)
    }

    /// Render the colophon from git history; returns the path and commit count
    pub fn colophon(&self) -> Result<(PathBuf, usize)> {
        fs::create_dir_all(&self.out_dir)?;

        let commits = GitLog::new(&self.root_dir).recent(self.commit_limit);
        let html = ColophonRenderer::new()?.render(&self.site, &commits)?;
        let path = self.out_dir.join(COLOPHON_PAGE);
        fs::write(&path, html)?;
        log::info!("Wrote colophon with {} commit(s) to {}", commits.len(), path.display());
        Ok((path, commits.len()))
    }

    /// Run every stage in order
    pub async fn build(&self) -> Result<BuildReport> {
        let manifest = self.gather().await?;
        let mut files_written = self.index_manifest(&manifest)?;
        let (colophon, commits) = self.colophon()?;
        files_written.push(colophon);

        Ok(BuildReport {
            tools: manifest.len(),
            commits,
            files_written,
        })
    }

    fn copy_tool(&self, file_name: &str) -> Result<PathBuf> {
        let source = self.root_dir.join(file_name);
        if !source.is_file() {
            return Err(ToolsiteError::MissingInput(source));
        }
        let dest = self.out_dir.join(file_name);

        // Copying a file onto itself would truncate it
        if same_file(&source, &dest) {
            log::debug!("{} is already in the output directory", file_name);
            return Ok(dest);
        }

        fs::copy(&source, &dest)?;
        Ok(dest)
    }
}

/// Tool urls must name a file directly inside the root directory
fn check_tool_url(name: &str, url: &str) -> Result<()> {
    let bare = Path::new(url).file_name().is_some_and(|file| file == url);
    if bare && url.ends_with(".html") {
        Ok(())
    } else {
        Err(ToolsiteError::Config(format!("Tool {} has an invalid url: {}", name, url)))
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

//! Commit history for the colophon page, read through the git CLI.

use std::path::PathBuf;
use std::process::Command;

use crate::domain::CommitEntry;

/// Field separator in `LOG_FORMAT` (ASCII unit separator)
const FIELD_SEP: char = '\u{1f}';

/// `git log` format: hash, author, date and subject joined by `FIELD_SEP`
const LOG_FORMAT: &str = "--pretty=format:%H%x1f%an%x1f%ai%x1f%s";

/// Reads recent commits from a repository.
///
/// Any failure to run git (not installed, not a repository, bad exit status)
/// is logged and produces an empty history.
#[derive(Debug, Clone)]
pub struct GitLog {
    repo_dir: PathBuf,
}

impl GitLog {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    /// Up to `limit` most recent non-merge commits, newest first
    pub fn recent(&self, limit: usize) -> Vec<CommitEntry> {
        if limit == 0 {
            return Vec::new();
        }

        let limit_arg = format!("-{}", limit);
        let output = Command::new("git")
            .args(["log", limit_arg.as_str(), LOG_FORMAT, "--no-merges"])
            .current_dir(&self.repo_dir)
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                log::warn!("Could not run git: {}", e);
                return Vec::new();
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::warn!("Could not get git log: {}", stderr.trim());
            return Vec::new();
        }

        let commits = parse_log(&String::from_utf8_lossy(&output.stdout));
        log::info!("Read {} commit(s) from {}", commits.len(), self.repo_dir.display());
        commits
    }
}

/// Parse `git log` output produced with `LOG_FORMAT`, skipping malformed lines
pub fn parse_log(stdout: &str) -> Vec<CommitEntry> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut parts = line.splitn(4, FIELD_SEP);
            let hash = parts.next()?.trim();
            let author = parts.next()?;
            let date = parts.next()?;
            let message = parts.next()?;
            if hash.is_empty() {
                return None;
            }
            Some(CommitEntry::new(hash, author, date, message))
        })
        .collect()
}

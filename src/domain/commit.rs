//! Commit entries read from version-control history

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Format git uses for `%ai` (author date, ISO-like)
const GIT_ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Human-readable date format for the colophon
const DISPLAY_FORMAT: &str = "%B %d, %Y at %H:%M";

/// A single commit from `git log`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitEntry {
    pub hash: String,
    pub short_hash: String,
    pub author: String,
    /// Author date exactly as git printed it
    pub timestamp: String,
    pub message: String,
}

impl CommitEntry {
    pub fn new(
        hash: impl Into<String>,
        author: impl Into<String>,
        timestamp: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let hash = hash.into();
        let short_hash = hash.chars().take(7).collect();
        Self {
            hash,
            short_hash,
            author: author.into(),
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }

    /// Parse the timestamp, accepting git's `%ai` form and RFC 3339
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.timestamp.trim();
        DateTime::parse_from_str(raw, GIT_ISO_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .ok()
    }

    /// Display date, or the raw timestamp when it cannot be parsed
    pub fn display_date(&self) -> String {
        match self.parsed_timestamp() {
            Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
            None => self.timestamp.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hash() {
        let commit = CommitEntry::new("0123456789abcdef", "Ada", "2025-01-01 00:00:00 +0000", "init");
        assert_eq!(commit.short_hash, "0123456");
    }

    #[test]
    fn test_short_hash_of_short_input() {
        let commit = CommitEntry::new("abc", "Ada", "", "init");
        assert_eq!(commit.short_hash, "abc");
    }

    #[test]
    fn test_display_date_git_format() {
        let commit = CommitEntry::new("abc", "Ada", "2024-11-05 14:03:22 -0800", "msg");
        assert_eq!(commit.display_date(), "November 05, 2024 at 14:03");
    }

    #[test]
    fn test_display_date_rfc3339() {
        let commit = CommitEntry::new("abc", "Ada", "2024-02-29T08:15:00+01:00", "msg");
        assert_eq!(commit.display_date(), "February 29, 2024 at 08:15");
    }

    #[test]
    fn test_display_date_unparseable() {
        let commit = CommitEntry::new("abc", "Ada", "last tuesday", "msg");
        assert!(commit.parsed_timestamp().is_none());
        assert_eq!(commit.display_date(), "last tuesday");
    }
}

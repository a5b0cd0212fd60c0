//! Colophon page: recent commit history.

use serde::Serialize;

use super::Templates;
use crate::config::SiteConfig;
use crate::domain::CommitEntry;
use crate::error::Result;

/// Output file name of the colophon page
pub const COLOPHON_PAGE: &str = "colophon.html";

const TEMPLATE_NAME: &str = "colophon";
const TEMPLATE: &str = include_str!("templates/colophon.hbs");

#[derive(Debug, Serialize)]
struct ColophonContext<'a> {
    site_title: &'a str,
    commits: Vec<CommitView<'a>>,
}

#[derive(Debug, Serialize)]
struct CommitView<'a> {
    short_hash: &'a str,
    author: &'a str,
    message: &'a str,
    date: String,
    url: Option<String>,
}

/// Renders `colophon.html` from commit history
pub struct ColophonRenderer {
    templates: Templates,
}

impl ColophonRenderer {
    pub fn new() -> Result<Self> {
        let mut templates = Templates::new();
        templates.register(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { templates })
    }

    pub fn render(&self, site: &SiteConfig, commits: &[CommitEntry]) -> Result<String> {
        let repo_url = site.repo_url();
        let commits = commits
            .iter()
            .map(|commit| CommitView {
                short_hash: &commit.short_hash,
                author: &commit.author,
                message: &commit.message,
                date: commit.display_date(),
                url: repo_url.map(|url| format!("{}/commit/{}", url, commit.hash)),
            })
            .collect();

        let context = ColophonContext {
            site_title: &site.title,
            commits,
        };
        self.templates.render(TEMPLATE_NAME, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits() -> Vec<CommitEntry> {
        vec![
            CommitEntry::new(
                "0123456789abcdef0123456789abcdef01234567",
                "Ada",
                "2025-03-01 10:30:00 +0000",
                "Add <timer> tool",
            ),
            CommitEntry::new("fedcba9876543210", "Grace", "not a date", "Initial commit"),
        ]
    }

    #[test]
    fn test_render_commits() {
        let site = SiteConfig {
            title: "My Tools".to_string(),
            ..Default::default()
        };
        let html = ColophonRenderer::new().unwrap().render(&site, &commits()).unwrap();

        assert!(html.contains("<title>Colophon &mdash; My Tools</title>"));
        assert!(html.contains("<code>0123456</code>"));
        assert!(html.contains("<span class=\"author\">Ada</span>"));
        assert!(html.contains("Add &lt;timer&gt; tool"));
        assert!(html.contains("March 01, 2025 at 10:30"));
        assert!(html.contains("<div class=\"date\">not a date</div>"));
        assert!(!html.contains("/commit/"));
        assert!(!html.contains("No git history available."));
    }

    #[test]
    fn test_render_commit_links() {
        let site = SiteConfig {
            repo_url: Some("https://github.com/me/tools".to_string()),
            ..Default::default()
        };
        let html = ColophonRenderer::new().unwrap().render(&site, &commits()).unwrap();
        assert!(html.contains(
            "<a href=\"https://github.com/me/tools/commit/0123456789abcdef0123456789abcdef01234567\"><code>0123456</code></a>"
        ));
    }

    #[test]
    fn test_render_no_commits() {
        let html = ColophonRenderer::new().unwrap().render(&SiteConfig::default(), &[]).unwrap();
        assert!(html.contains("No git history available."));
        assert!(html.contains("<a href=\"./\">"));
    }
}

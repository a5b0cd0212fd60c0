//! End-to-end site build tests
//!
//! Builds a small tool directory into a temp output directory with no LLM configured.

use std::fs;
use std::path::Path;

use toolsite::collector::Collector;
use toolsite::config::{BuildConfig, LlmConfig, SiteConfig};
use toolsite::domain::{BuildManifest, DescriptionSource, FALLBACK_DESCRIPTION};
use toolsite::error::Result;
use toolsite::llm::generation_enabled;
use toolsite::site::SiteBuilder;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// A root directory with documented, undocumented and categorized tools
fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "_config.yml",
        "title: Test Tools\ndescription: Tools for testing\nrepo_url: https://example.com/repo\ngroup_by_category: true\n",
    );
    write(root, "json-diff.html", "<html><head><title>JSON Diff</title></head></html>");
    write(
        root,
        "json-diff.docs.md",
        "---\ncategory: data\ntags: [json, diff]\n---\n# JSON Diff\n\nCompare two JSON documents.\n",
    );
    write(root, "qr-code.html", "<html><head><title>QR Code</title></head></html>");
    write(root, "qr-code.docs.md", "Make QR codes.\n");
    write(root, "stopwatch.html", "<html><body>no title here</body></html>");
    write(root, "index.html", "<title>stale index</title>");
    temp
}

fn build_config(root: &Path, out: &Path) -> BuildConfig {
    BuildConfig {
        root_dir: root.to_path_buf(),
        out_dir: out.to_path_buf(),
        ..Default::default()
    }
}

async fn build(root: &Path, out: &Path) -> Result<BuildManifest> {
    let site = SiteConfig::load(root)?;
    let builder = SiteBuilder::new(&build_config(root, out), site).with_collector(Collector::new());
    builder.build().await?;
    BuildManifest::load(builder.manifest_path())
}

#[tokio::test]
async fn test_one_record_per_tool() -> Result<()> {
    let temp = fixture();
    let manifest = build(temp.path(), &temp.path().join("dist")).await?;

    let names: Vec<_> = manifest.tools().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["json-diff", "qr-code", "stopwatch"]);
    Ok(())
}

#[tokio::test]
async fn test_missing_docs_get_fallback_without_key() -> Result<()> {
    assert!(!generation_enabled(&LlmConfig::default(), None, None));

    let temp = fixture();
    let manifest = build(temp.path(), &temp.path().join("dist")).await?;

    let stopwatch = manifest.get("stopwatch").unwrap();
    assert_eq!(stopwatch.description, FALLBACK_DESCRIPTION);
    assert_eq!(stopwatch.description_source, DescriptionSource::Fallback);
    assert_eq!(stopwatch.title, "Stopwatch");

    let qr = manifest.get("qr-code").unwrap();
    assert_eq!(qr.description, "Make QR codes.");
    assert!(qr.category.is_none());
    Ok(())
}

#[tokio::test]
async fn test_rebuild_is_byte_identical() -> Result<()> {
    let temp = fixture();
    let first_out = temp.path().join("dist-a");
    let second_out = temp.path().join("dist-b");

    build(temp.path(), &first_out).await?;
    let first_manifest = fs::read(temp.path().join("tools.json"))?;
    build(temp.path(), &second_out).await?;
    let second_manifest = fs::read(temp.path().join("tools.json"))?;

    assert_eq!(first_manifest, second_manifest);
    for page in ["index.html", "colophon.html", "json-diff.html", "qr-code.html", "stopwatch.html"] {
        assert_eq!(
            fs::read(first_out.join(page))?,
            fs::read(second_out.join(page))?,
            "{} differs between builds",
            page
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_index_lists_every_tool_once() -> Result<()> {
    let temp = fixture();
    let out = temp.path().join("dist");
    let manifest = build(temp.path(), &out).await?;

    let index = fs::read_to_string(out.join("index.html"))?;
    assert!(index.contains("<title>Test Tools</title>"));
    assert!(index.contains("<h2 class=\"category\">data</h2>"));
    assert!(index.contains("<h2 class=\"category\">Other</h2>"));
    for tool in &manifest {
        let link = format!("<a href=\"{}\">", tool.url);
        assert_eq!(index.matches(&link).count(), 1, "{}", tool.name);
        assert!(out.join(&tool.url).exists());
    }
    assert!(!index.contains("stale index"));
    Ok(())
}

#[tokio::test]
async fn test_separate_stages() -> Result<()> {
    let temp = fixture();
    let out = temp.path().join("public");
    let builder = SiteBuilder::new(&build_config(temp.path(), &out), SiteConfig::load(temp.path())?);

    let manifest = builder.gather().await?;
    assert_eq!(manifest.len(), 3);
    assert!(!out.join("index.html").exists());

    let written = builder.index()?;
    assert_eq!(written.len(), 4);

    let (colophon, _) = builder.colophon()?;
    assert!(fs::read_to_string(colophon)?.contains("Colophon &mdash; Test Tools"));
    Ok(())
}

#[tokio::test]
async fn test_missing_root_aborts() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("does-not-exist");
    assert!(build(&root, &temp.path().join("dist")).await.is_err());
}

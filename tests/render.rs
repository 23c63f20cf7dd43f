//! End-to-end tests for the write stage: generate into a temp directory and
//! assert on what lands on disk.

use careconnect_site::config::SiteConfig;
use careconnect_site::{catalog, generate::generate};
use std::fs;
use tempfile::TempDir;

#[test]
fn generates_all_five_files() {
    let tmp = TempDir::new().unwrap();
    let summary = generate(tmp.path(), &SiteConfig::default()).unwrap();

    for file in [
        "footer.html",
        "side-panel.html",
        "health-tips.html",
        "side-images.json",
        "index.html",
    ] {
        assert!(tmp.path().join(file).exists(), "{file} missing");
    }
    assert_eq!(summary.files.len(), 5);
    assert_eq!(summary.columns, 4);
    assert_eq!(summary.links, 12);
    assert_eq!(summary.images, 3);
    assert_eq!(summary.tips, 10);
}

#[test]
fn fragments_are_bare_markup() {
    let tmp = TempDir::new().unwrap();
    generate(tmp.path(), &SiteConfig::default()).unwrap();

    let footer = fs::read_to_string(tmp.path().join("footer.html")).unwrap();
    assert!(footer.starts_with("<footer"));
    assert!(!footer.contains("<!DOCTYPE"));
    assert!(!footer.contains("<style"));

    let panel = fs::read_to_string(tmp.path().join("side-panel.html")).unwrap();
    assert!(panel.starts_with("<aside"));
}

#[test]
fn manifest_round_trips_the_catalog_in_order() {
    let tmp = TempDir::new().unwrap();
    generate(tmp.path(), &SiteConfig::default()).unwrap();

    let json = fs::read_to_string(tmp.path().join("side-images.json")).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

    assert_eq!(records.len(), catalog::side_images().len());
    for (record, expected) in records.iter().zip(catalog::side_images()) {
        assert_eq!(record["url"], expected.url);
        assert_eq!(record["title"], expected.title);
        assert_eq!(record["caption"], expected.caption);
    }
}

#[test]
fn preview_inlines_config_css_and_embeds_fragments() {
    let tmp = TempDir::new().unwrap();
    let mut config = SiteConfig::default();
    config.colors.light.accent = "#123456".to_string();
    generate(tmp.path(), &config).unwrap();

    let preview = fs::read_to_string(tmp.path().join("index.html")).unwrap();
    assert!(preview.starts_with("<!DOCTYPE html>"));
    assert!(preview.contains("--color-accent: #123456"));
    assert!(preview.contains("@media (prefers-color-scheme: dark)"));
    assert!(preview.contains("site-footer"));
    assert!(preview.contains("side-panel"));
    assert!(preview.contains("health-tips"));
}

#[test]
fn regeneration_is_idempotent() {
    // Byte-identical output except across a calendar year boundary
    let tmp = TempDir::new().unwrap();
    let config = SiteConfig::default();

    generate(tmp.path(), &config).unwrap();
    let first = fs::read_to_string(tmp.path().join("footer.html")).unwrap();
    let first_preview = fs::read_to_string(tmp.path().join("index.html")).unwrap();

    generate(tmp.path(), &config).unwrap();
    let second = fs::read_to_string(tmp.path().join("footer.html")).unwrap();
    let second_preview = fs::read_to_string(tmp.path().join("index.html")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_preview, second_preview);
}

#[test]
fn generate_creates_missing_output_directory() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("out").join("fragments");
    generate(&nested, &SiteConfig::default()).unwrap();
    assert!(nested.join("index.html").exists());
}

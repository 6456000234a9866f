//! Integration tests for the remove operation.

use parts_core::{BuildConfig, BuildOperation, Error, Outcome, RemoveConfig, RemoveOperation};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const ORIGINAL: &str = "# Original config\nHost example\n    User test\n";

#[test]
fn test_remove_after_build_restores_original() {
    let dir = TempDir::new().unwrap();
    let aggregate = dir.path().join("config");
    let partials_dir = dir.path().join("config.d");
    fs::create_dir(&partials_dir).unwrap();
    fs::write(&aggregate, ORIGINAL).unwrap();
    fs::write(partials_dir.join("server1"), "Host server1\n    User admin").unwrap();

    BuildOperation::new(BuildConfig::new(&aggregate, &partials_dir, "#"))
        .run()
        .unwrap();
    assert_ne!(fs::read_to_string(&aggregate).unwrap(), ORIGINAL);

    let report = RemoveOperation::new(RemoveConfig::new(&aggregate, "#"))
        .run()
        .unwrap();

    assert_eq!(report.outcome, Outcome::Written);
    assert_eq!(fs::read_to_string(&aggregate).unwrap(), ORIGINAL);
}

#[test]
fn test_remove_keeps_surrounding_content() {
    let dir = TempDir::new().unwrap();
    let aggregate = dir.path().join("site.css");
    let markers = RemoveConfig::new(&aggregate, "auto").markers();
    let content = format!(
        "body {{}}\n\n{}\n.a {{}}\n{}\nfooter {{}}\n",
        markers.start(),
        markers.end()
    );
    fs::write(&aggregate, content).unwrap();

    RemoveOperation::new(RemoveConfig::new(&aggregate, "auto"))
        .run()
        .unwrap();

    assert_eq!(fs::read_to_string(&aggregate).unwrap(), "body {}\nfooter {}\n");
}

#[test]
fn test_remove_without_region_fails() {
    let dir = TempDir::new().unwrap();
    let aggregate = dir.path().join("config");
    fs::write(&aggregate, ORIGINAL).unwrap();

    let err = RemoveOperation::new(RemoveConfig::new(&aggregate, "#"))
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::RegionNotFound { .. }));
    let message = err.to_string();
    assert!(message.contains("no partials section found in file"));
    assert!(message.contains("looking for comment style '#'"));
    assert_eq!(fs::read_to_string(&aggregate).unwrap(), ORIGINAL);
}

#[test]
fn test_remove_dry_run_without_region_is_noop() {
    let dir = TempDir::new().unwrap();
    let aggregate = dir.path().join("config");
    fs::write(&aggregate, ORIGINAL).unwrap();

    let report = RemoveOperation::new(RemoveConfig::new(&aggregate, "#").with_dry_run(true))
        .run()
        .unwrap();

    assert_eq!(report.outcome, Outcome::NoRegion);
    assert_eq!(report.bytes_removed(), 0);
    assert!(report.render_preview().contains("No partials section found"));
}

#[test]
fn test_remove_dry_run_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let aggregate = dir.path().join("config");
    let markers = RemoveConfig::new(&aggregate, "#").markers();
    let content = format!("{ORIGINAL}{}\nHost x\n{}\n", markers.start(), markers.end());
    fs::write(&aggregate, &content).unwrap();

    let report = RemoveOperation::new(RemoveConfig::new(&aggregate, "#").with_dry_run(true))
        .run()
        .unwrap();

    assert_eq!(report.outcome, Outcome::Preview);
    assert_eq!(report.content, ORIGINAL);
    assert_eq!(report.bytes_removed(), content.len() - ORIGINAL.len());
    assert_eq!(fs::read_to_string(&aggregate).unwrap(), content);

    let preview = report.render_preview();
    assert!(preview.contains(&format!("Removed {} bytes", report.bytes_removed())));
}

#[test]
fn test_remove_wrong_style_not_found() {
    let dir = TempDir::new().unwrap();
    let aggregate = dir.path().join("config");
    let markers = RemoveConfig::new(&aggregate, "#").markers();
    fs::write(&aggregate, format!("a\n{}\nx\n{}\n", markers.start(), markers.end())).unwrap();

    let result = RemoveOperation::new(RemoveConfig::new(&aggregate, "//")).run();

    assert!(matches!(result, Err(Error::RegionNotFound { .. })));
}

#[test]
fn test_remove_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = RemoveOperation::new(RemoveConfig::new(dir.path().join("missing"), "#")).run();

    assert!(matches!(result, Err(Error::SourceRead(_))));
}

//! Integration tests for the build operation.

use parts_core::{BuildConfig, BuildOperation, Error, Outcome};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ORIGINAL_SSH: &str = "# Original SSH config\nHost example.com\n    User test\n";

/// Temp dir with an aggregate file and an empty partials directory.
fn setup(aggregate_name: &str, aggregate_content: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let partials_dir = dir.path().join("partials");
    fs::create_dir_all(&partials_dir).unwrap();
    let aggregate = dir.path().join(aggregate_name);
    fs::write(&aggregate, aggregate_content).unwrap();
    (dir, aggregate, partials_dir)
}

fn write_partial(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn run_and_read(config: &BuildConfig) -> String {
    BuildOperation::new(config.clone()).run().unwrap();
    fs::read_to_string(config.aggregate_file()).unwrap()
}

#[test]
fn test_build_into_empty_file() {
    let (_dir, aggregate, partials_dir) = setup("agg", "");
    write_partial(&partials_dir, "partials1", "Partial 1");
    write_partial(&partials_dir, "partials2", "Partial 2");

    let actual = run_and_read(&BuildConfig::new(&aggregate, &partials_dir, "#"));

    let expected = "\n# ============================\n# PARTIALS>>>>>\n# ============================\n\
                    Partial 1\nPartial 2\n\
                    # ============================\n# PARTIALS<<<<<\n# ============================\n";
    assert_eq!(actual, expected);
}

#[test]
fn test_build_is_idempotent() {
    let (_dir, aggregate, partials_dir) = setup("agg", ORIGINAL_SSH);
    write_partial(&partials_dir, "partial1", "Host server1\n    User admin");
    write_partial(&partials_dir, "partial2", "Host server2\n    User root");
    let config = BuildConfig::new(&aggregate, &partials_dir, "#");

    let first = run_and_read(&config);
    let second = run_and_read(&config);
    let third = run_and_read(&config);

    assert_eq!(first, second);
    assert_eq!(second, third);

    write_partial(&partials_dir, "partial3", "Host server3\n    User guest");
    let with_new = run_and_read(&config);
    let last = run_and_read(&config);

    assert_eq!(with_new, last);
    assert!(with_new.contains("Host server3"));
}

#[test]
fn test_build_preserves_original_content() {
    let (_dir, aggregate, partials_dir) = setup("agg", "# My existing config\nHost personal\n    User me\n");
    write_partial(&partials_dir, "work", "Host work\n    User admin");

    let result = run_and_read(&BuildConfig::new(&aggregate, &partials_dir, "#"));

    assert!(result.starts_with("# My existing config\nHost personal\n    User me\n# ===="));
    assert!(result.contains("Host work\n    User admin\n"));
}

#[test]
fn test_build_report() {
    let (_dir, aggregate, partials_dir) = setup("agg", ORIGINAL_SSH);
    write_partial(&partials_dir, "b", "B");
    write_partial(&partials_dir, "a", "A");

    let report = BuildOperation::new(BuildConfig::new(&aggregate, &partials_dir, "#"))
        .run()
        .unwrap();

    assert_eq!(report.outcome, Outcome::Written);
    assert_eq!(report.partials, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(report.original_len, ORIGINAL_SSH.len());
    assert_eq!(report.new_len, report.content.len());
    assert!(report.content.contains("A\nB\n"));
}

#[test]
fn test_build_skips_subdirectories() {
    let (_dir, aggregate, partials_dir) = setup("agg", "");
    write_partial(&partials_dir, "top", "top level");
    fs::create_dir(partials_dir.join("nested")).unwrap();
    write_partial(&partials_dir.join("nested"), "inner", "should not appear");

    let result = run_and_read(&BuildConfig::new(&aggregate, &partials_dir, "#"));

    assert!(result.contains("top level"));
    assert!(!result.contains("should not appear"));
}

#[test]
fn test_build_with_no_partials_writes_empty_region() {
    let (_dir, aggregate, partials_dir) = setup("agg", "keep\n");
    let config = BuildConfig::new(&aggregate, &partials_dir, "#");
    let markers = BuildOperation::new(config.clone()).markers().clone();

    let result = run_and_read(&config);

    assert_eq!(result, format!("keep\n{}\n{}\n", markers.start(), markers.end()));
}

#[rstest]
#[case("#", "# PARTIALS>>>>>", "# PARTIALS<<<<<")]
#[case("//", "// PARTIALS>>>>>", "// PARTIALS<<<<<")]
#[case("--", "-- PARTIALS>>>>>", "-- PARTIALS<<<<<")]
#[case("/*", "/*\n/* PARTIALS>>>>>\n*/", "/*\n/* PARTIALS<<<<<\n*/")]
#[case("<!--", "<!--\n<!-- PARTIALS>>>>>\n-->", "<!--\n<!-- PARTIALS<<<<<\n-->")]
#[case("@@", "@@ PARTIALS>>>>>", "@@ PARTIALS<<<<<")]
fn test_build_comment_styles(#[case] style: &str, #[case] start: &str, #[case] end: &str) {
    let (_dir, aggregate, partials_dir) = setup("agg", "Original content\n");
    write_partial(&partials_dir, "partial1", "Test content");

    let result = run_and_read(&BuildConfig::new(&aggregate, &partials_dir, style));

    assert!(result.contains(start), "missing start marker in {result:?}");
    assert!(result.contains(end), "missing end marker in {result:?}");
    assert!(result.contains("Test content"));
}

#[test]
fn test_build_auto_detects_python() {
    let (_dir, aggregate, partials_dir) = setup("config.py", "# Original Python config\n");
    write_partial(&partials_dir, "partial1", "DEBUG = True");

    let result = run_and_read(&BuildConfig::new(&aggregate, &partials_dir, "auto"));

    assert!(result.contains("# PARTIALS>>>>>"));
    assert!(result.contains("# PARTIALS<<<<<"));
    assert!(result.contains("# ============================"));
}

#[test]
fn test_build_dry_run_leaves_file_untouched() {
    let (_dir, aggregate, partials_dir) = setup("agg", ORIGINAL_SSH);
    write_partial(&partials_dir, "partial1", "Host server1\n    User admin");

    let config = BuildConfig::new(&aggregate, &partials_dir, "#").with_dry_run(true);
    let report = BuildOperation::new(config).run().unwrap();

    assert_eq!(report.outcome, Outcome::Preview);
    assert!(report.content.contains("Host server1"));
    assert_eq!(fs::read_to_string(&aggregate).unwrap(), ORIGINAL_SSH);

    let preview = report.render_preview();
    assert!(preview.contains("--- BEGIN FILE CONTENT ---\n# Original SSH config"));
    assert!(preview.contains(&format!("Total length: {} bytes", report.new_len)));
    assert!(preview.ends_with(&format!("Added {} bytes\n", report.new_len - report.original_len)));
}

#[test]
fn test_build_repeated_with_stray_end_marker() {
    let end = "# ============================\n# PARTIALS<<<<<\n# ============================";
    let original = format!("Host a\n{end}\nHost b\n");
    let (_dir, aggregate, partials_dir) = setup("config", &original);
    write_partial(&partials_dir, "10-p", "Host p");
    let config = BuildConfig::new(&aggregate, &partials_dir, "#");

    let first = run_and_read(&config);
    let second = run_and_read(&config);
    let third = run_and_read(&config);

    assert!(first.starts_with(&original));
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn test_build_missing_aggregate_file() {
    let dir = TempDir::new().unwrap();
    let config = BuildConfig::new(dir.path().join("missing"), dir.path(), "#");

    let err = BuildOperation::new(config).run().unwrap_err();

    assert!(matches!(err, Error::SourceRead(_)));
    assert!(err.to_string().contains("failed to read aggregate file"));
}

#[test]
fn test_build_missing_partials_dir() {
    let (dir, aggregate, _partials_dir) = setup("agg", "test");
    let config = BuildConfig::new(&aggregate, dir.path().join("nonexistent"), "#");

    let err = BuildOperation::new(config).run().unwrap_err();

    assert!(matches!(err, Error::PartialsList(_)));
    assert!(err.to_string().contains("failed to read partials directory"));
    assert_eq!(fs::read_to_string(&aggregate).unwrap(), "test");
}

#[test]
fn test_build_unreadable_partial_aborts() {
    let (_dir, aggregate, partials_dir) = setup("agg", "test\n");
    write_partial(&partials_dir, "good", "fine");
    fs::write(partials_dir.join("bad"), [0xff, 0xfe]).unwrap();

    let err = BuildOperation::new(BuildConfig::new(&aggregate, &partials_dir, "#"))
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::PartialRead(_)));
    assert!(err.to_string().contains("failed to read partial file"));
    assert_eq!(fs::read_to_string(&aggregate).unwrap(), "test\n");
}

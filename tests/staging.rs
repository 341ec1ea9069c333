//! Staging builder integration tests.

use deploypack::{
    directory_size, prepare_staging, stage_entry, write_artifacts, ExcludePattern, PackageError,
    Settings, StageOutcome,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn test_settings(include: &[&str], exclude: &[&str]) -> Settings {
    Settings {
        include: include.iter().map(|s| s.to_string()).collect(),
        exclude: exclude.iter().map(ExcludePattern::new).collect(),
        ..Settings::default()
    }
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

async fn run_staging(root: &Path, settings: &Settings) -> std::path::PathBuf {
    let staging = prepare_staging(root, settings).await.unwrap();
    for entry in &settings.include {
        stage_entry(root, &staging, entry, &settings.exclude)
            .await
            .unwrap();
    }
    staging
}

#[tokio::test]
async fn stages_files_and_prunes_node_modules() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.txt", "hello");
    write(root, "src/index.js", "console.log('hi');");
    write(root, "src/node_modules/pkg/file.js", "nope");

    let settings = test_settings(&["a.txt", "src/"], &["node_modules"]);
    let staging = run_staging(root, &settings).await;

    assert!(staging.join("a.txt").is_file());
    assert!(staging.join("src/index.js").is_file());
    assert!(!staging.join("src/node_modules").exists());
}

#[tokio::test]
async fn literal_pattern_excludes_by_substring_at_every_depth() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/index.js", "code");
    write(root, "src/my-build-script.js", "code");
    write(root, "src/deep/build/out.js", "code");

    let settings = test_settings(&["src/"], &["build"]);
    let staging = run_staging(root, &settings).await;

    assert!(staging.join("src/index.js").is_file());
    assert!(!staging.join("src/my-build-script.js").exists());
    assert!(!staging.join("src/deep/build").exists());
}

#[tokio::test]
async fn wildcard_pattern_prunes_entire_subtree() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/keep.js", "code");
    write(root, "src/debug.log", "log line");
    write(root, "src/logfile.txt", "not a log extension");
    write(root, "src/old.tmp/inner/file.js", "stale");

    let settings = test_settings(&["src/"], &["*.log", "*.tmp"]);
    let staging = run_staging(root, &settings).await;

    assert!(staging.join("src/keep.js").is_file());
    assert!(staging.join("src/logfile.txt").is_file());
    assert!(!staging.join("src/debug.log").exists());
    assert!(!staging.join("src/old.tmp").exists());
}

#[tokio::test]
async fn missing_inclusion_entry_is_a_warning_not_an_error() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.txt", "hello");

    let settings = test_settings(&["a.txt", "does-not-exist.json"], &[]);
    let staging = prepare_staging(root, &settings).await.unwrap();

    let found = stage_entry(root, &staging, "a.txt", &settings.exclude)
        .await
        .unwrap();
    assert_eq!(found, StageOutcome::File);

    let missing = stage_entry(root, &staging, "does-not-exist.json", &settings.exclude)
        .await
        .unwrap();
    assert_eq!(missing, StageOutcome::Missing);
    assert!(staging.join("a.txt").is_file());
}

#[tokio::test]
async fn rerun_removes_stale_staging_content() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.txt", "hello");

    let settings = test_settings(&["a.txt"], &[]);
    let staging = run_staging(root, &settings).await;

    // Simulate leftovers from an older, different run.
    write(&staging, "stale/leftover.js", "old");
    assert!(staging.join("stale/leftover.js").is_file());

    let staging = run_staging(root, &settings).await;
    assert!(staging.join("a.txt").is_file());
    assert!(!staging.join("stale").exists());
}

#[tokio::test]
async fn staging_is_idempotent_over_an_unchanged_tree() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.txt", "hello");
    write(root, "src/index.js", "code");
    write(root, "src/nested/deep.js", "more code");

    let settings = test_settings(&["a.txt", "src/"], &[]);
    let staging = run_staging(root, &settings).await;
    let first = collect_tree(&staging);

    let staging = run_staging(root, &settings).await;
    let second = collect_tree(&staging);

    assert_eq!(first, second);
}

#[tokio::test]
async fn directory_entries_copy_recursively() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "docs/guide.md", "guide");
    write(root, "docs/api/reference.md", "api");

    let settings = test_settings(&["docs/"], &[]);
    let staging = prepare_staging(root, &settings).await.unwrap();
    let outcome = stage_entry(root, &staging, "docs/", &settings.exclude)
        .await
        .unwrap();

    assert_eq!(outcome, StageOutcome::Directory { files: 2 });
    assert!(staging.join("docs/guide.md").is_file());
    assert!(staging.join("docs/api/reference.md").is_file());
}

#[tokio::test]
async fn generated_artifacts_land_in_the_staging_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    let settings = test_settings(&[], &[]);
    let staging = prepare_staging(root, &settings).await.unwrap();
    write_artifacts(&staging, &settings).await.unwrap();

    assert!(staging.join("setup.sh").is_file());
    assert!(staging.join("setup.bat").is_file());
    assert!(staging.join("README.md").is_file());

    let readme = fs::read_to_string(staging.join("README.md")).unwrap();
    assert!(readme.contains("Easy Deployment"));
    assert!(readme.contains(&settings.repository_url));

    let script = fs::read_to_string(staging.join("setup.sh")).unwrap();
    assert!(script.starts_with("#!/bin/bash"));
    assert!(script.contains(&settings.product_name));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(staging.join("setup.sh")).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111, "setup.sh should be executable");
    }
}

#[tokio::test]
async fn io_failure_while_generating_artifacts_is_fatal() {
    let dir = TempDir::new().unwrap();
    let settings = test_settings(&[], &[]);
    let staging = prepare_staging(dir.path(), &settings).await.unwrap();

    // A directory squatting on the script path makes the write fail for
    // any user, including root.
    fs::create_dir(staging.join("setup.sh")).unwrap();

    let err = write_artifacts(&staging, &settings).await.unwrap_err();
    assert!(matches!(err, PackageError::Artifact(_)));
}

#[tokio::test]
async fn io_failure_while_copying_is_fatal() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/index.js", "code");

    let settings = test_settings(&["src/"], &[]);
    let staging = prepare_staging(root, &settings).await.unwrap();

    // A file squatting where the directory must be created blocks the
    // recursive copy.
    fs::write(staging.join("src"), "squatter").unwrap();

    let err = stage_entry(root, &staging, "src/", &settings.exclude)
        .await
        .unwrap_err();
    assert!(matches!(err, PackageError::Staging(_)));
}

#[tokio::test]
async fn size_report_sums_known_file_sizes() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("a"), vec![0u8; 100]).unwrap();
    fs::write(root.join("b"), vec![0u8; 250]).unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/c"), vec![0u8; 4096]).unwrap();

    assert_eq!(directory_size(root).unwrap(), 4446);
}

/// Sorted (relative path, contents) pairs for tree comparison.
fn collect_tree(root: &Path) -> Vec<(String, Vec<u8>)> {
    let mut entries: Vec<(String, Vec<u8>)> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect();
    entries.sort();
    entries
}

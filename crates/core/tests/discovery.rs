use kdrive_api::{DiagnosticCollector, FileKind, Severity};
use kdrive_core::discovery::{SourceDiscovery, SourceRoot, discover_sources};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap()
}

#[test]
fn test_file_named_directly_and_via_parent_is_discovered_once() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    let a = src.join("a.kt");
    let b = src.join("b.kt");
    write(&a, "fun a() = 1");
    write(&b, "fun b() = 2");

    let sink = DiagnosticCollector::new();
    let units = discover_sources([a.as_path(), src.as_path()], &sink);

    assert!(sink.is_empty(), "{:?}", sink.diagnostics());
    assert_eq!(units.len(), 2);
    // The explicitly named file is seen first.
    assert_eq!(units[0].path, canonical(&a));
    assert_eq!(units[0].text, "fun a() = 1");
    let seen = |path: &Path| units.iter().filter(|u| u.path == canonical(path)).count();
    assert_eq!(seen(&a), 1);
    assert_eq!(seen(&b), 1);
}

#[test]
fn test_same_directory_twice_adds_nothing() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("x/one.kt"), "");
    write(&dir.path().join("x/two.kt"), "");

    let sink = DiagnosticCollector::new();
    let root = dir.path().join("x");
    let dotted = dir.path().join("x/../x");
    let units = discover_sources([&root, &dotted], &sink);

    assert_eq!(units.len(), 2);
    assert!(sink.is_empty());
}

#[test]
fn test_missing_root_reports_once_and_continues() {
    let dir = tempdir().unwrap();
    let present = dir.path().join("present.kt");
    write(&present, "val x = 1");
    let missing = dir.path().join("missing");

    let sink = DiagnosticCollector::new();
    let units = discover_sources([&missing, &present], &sink);

    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        format!("Source file or directory not found: {}", missing.display())
    );
    assert!(errors[0].location.is_none());
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].path, canonical(&present));
}

#[test]
fn test_non_kotlin_file_root_is_rejected() {
    let dir = tempdir().unwrap();
    let java = dir.path().join("Main.java");
    write(&java, "class Main {}");

    let sink = DiagnosticCollector::new();
    let units = discover_sources([&java], &sink);

    assert!(units.is_empty());
    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(
        diagnostics[0].message,
        format!("Source entry is not a Kotlin file: {}", java.display())
    );
}

#[test]
fn test_other_files_under_directory_are_skipped_silently() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    write(&src.join("Main.kt"), "fun main() {}");
    write(&src.join("README.md"), "# readme");
    write(&src.join("nested/Helper.java"), "class Helper {}");
    write(&src.join("nested/deeper/Util.kt"), "object Util");
    fs::write(src.join("Broken.kt"), [0xFF, 0xFE, 0x00, 0xC3]).unwrap();

    let sink = DiagnosticCollector::new();
    let units = discover_sources([&src], &sink);

    assert!(sink.is_empty());
    let mut names: Vec<_> = units.iter().map(|u| u.file_name().to_string()).collect();
    names.sort();
    assert_eq!(names, vec!["Main.kt", "Util.kt"]);
    assert!(units.iter().all(|u| u.kind == FileKind::Kotlin));
}

#[test]
fn test_absent_and_empty_roots_are_ignored() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.kt");
    write(&file, "");

    let sink = DiagnosticCollector::new();
    let roots = vec![
        SourceRoot::absent(),
        SourceRoot::from(""),
        SourceRoot::from(Some(file.clone())),
    ];
    let units = discover_sources(roots, &sink);

    assert!(sink.is_empty());
    assert_eq!(units.len(), 1);
}

#[test]
fn test_results_before_an_error_are_kept() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("first/a.kt"), "");
    write(&dir.path().join("second/b.kt"), "");

    let sink = DiagnosticCollector::new();
    let mut discovery = SourceDiscovery::new(&sink);
    discovery.add_root(dir.path().join("first"));
    discovery.add_root(dir.path().join("nowhere"));
    discovery.add_root(dir.path().join("second"));
    assert_eq!(discovery.processed_count(), 2);
    let units = discovery.finish();

    assert_eq!(sink.errors().len(), 1);
    let names: Vec<_> = units.iter().map(|u| u.file_name()).collect();
    assert_eq!(names, vec!["a.kt", "b.kt"]);
}

#[test]
fn test_expected_kind_can_be_changed() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("src/A.java"), "class A {}");
    write(&dir.path().join("src/b.kt"), "");

    let sink = DiagnosticCollector::new();
    let mut discovery = SourceDiscovery::new(&sink).with_expected_kind(FileKind::Java);
    discovery.add_root(dir.path().join("src"));
    let units = discovery.finish();

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].file_name(), "A.java");
}

#[cfg(unix)]
#[test]
fn test_symlinks_do_not_duplicate_or_loop() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    write(&src.join("a.kt"), "fun a() {}");
    symlink(src.join("a.kt"), src.join("alias.kt")).unwrap();
    symlink(&src, src.join("loop")).unwrap();

    let sink = DiagnosticCollector::new();
    let units = discover_sources([&src], &sink);

    assert!(sink.is_empty());
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].path, canonical(&src.join("a.kt")));
}

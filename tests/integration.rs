use combcat::{ReportBuilder, ReportOptions, SnapshotTools, combine_to_writer, scan};
use std::fs;
use std::io;
use std::path::Path;
use tempfile::tempdir;

struct StubTools;
impl SnapshotTools for StubTools {
    fn tree(&self, _root: &Path, _exclude: &[String]) -> io::Result<String> {
        Ok("stub tree output".into())
    }
    fn long_listing(&self, _root: &Path) -> io::Result<String> {
        Ok("stub ls output".into())
    }
}

struct FailingTools;
impl SnapshotTools for FailingTools {
    fn tree(&self, _root: &Path, _exclude: &[String]) -> io::Result<String> {
        Err(io::Error::other("tree: command not found"))
    }
    fn long_listing(&self, _root: &Path) -> io::Result<String> {
        Err(io::Error::other("ls: command not found"))
    }
}

fn render(options: &ReportOptions, tools: &dyn SnapshotTools) -> (String, combcat::RunSummary) {
    let mut out = Vec::new();
    let summary = combine_to_writer(options, tools, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn extension_filter_and_hidden_dirs() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "print(1)").unwrap();
    fs::write(dir.path().join("b.txt"), "notes").unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git/secret.py"), "token").unwrap();
    let options = ReportBuilder::new(dir.path())
        .extensions(vec![".py".into()])
        .build();
    let (report, summary) = render(&options, &StubTools);
    assert_eq!(report.matches("**File:**").count(), 1);
    assert!(report.contains("**File:** a.py"));
    assert!(report.contains("```python\nprint(1)\n```"));
    assert!(!report.contains("secret"));
    assert!(!report.contains("b.txt"));
    assert!(report.contains("files included: 1, skipped: 0"));
    assert_eq!(summary.included, 1);
    assert_eq!(summary.skipped, 0);
}

#[test]
fn excluded_directory_is_pruned_transitively() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "print(1)").unwrap();
    fs::create_dir_all(dir.path().join("build/sub")).unwrap();
    fs::write(dir.path().join("build/x.py"), "x").unwrap();
    fs::write(dir.path().join("build/sub/y.py"), "y").unwrap();
    let options = ReportBuilder::new(dir.path())
        .extensions(vec![".py".into()])
        .exclude(vec!["build".into()])
        .build();
    let (report, summary) = render(&options, &StubTools);
    assert!(!report.contains("x.py"));
    assert!(!report.contains("y.py"));
    assert!(!report.contains("### build"));
    assert_eq!(summary.included, 1);
}

#[test]
fn hidden_files_skipped_without_extension_filter() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "a").unwrap();
    fs::write(dir.path().join(".env"), "SECRET=1").unwrap();
    let options = ReportBuilder::new(dir.path()).build();
    let (report, summary) = render(&options, &StubTools);
    assert!(!report.contains(".env"));
    assert!(!report.contains("SECRET"));
    assert_eq!(summary.included, 1);
}

#[test]
fn non_utf8_file_is_skipped_with_warning() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.py"), [0xff, 0xfe, 0x00, 0x01]).unwrap();
    fs::write(dir.path().join("good.py"), "ok").unwrap();
    let options = ReportBuilder::new(dir.path())
        .extensions(vec![".py".into()])
        .build();
    let (report, summary) = render(&options, &StubTools);
    assert!(report.contains("[!] could not read file"));
    assert_eq!(summary.included, 1);
    assert_eq!(summary.skipped, 1);
    assert!(report.contains("files included: 1, skipped: 1"));
}

#[test]
fn empty_directory_still_gets_heading() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/readme.txt"), "hi").unwrap();
    let options = ReportBuilder::new(dir.path())
        .extensions(vec![".py".into()])
        .build();
    let (report, summary) = render(&options, &StubTools);
    assert!(report.contains("### docs"));
    assert_eq!(summary.included, 0);
}

#[test]
fn fence_body_round_trips() {
    let dir = tempdir().unwrap();
    let body = "line one\n  line two\nno trailing newline";
    fs::write(dir.path().join("a.py"), body).unwrap();
    let options = ReportBuilder::new(dir.path())
        .extensions(vec![".py".into()])
        .build();
    let (report, _) = render(&options, &StubTools);
    let open = "```python\n";
    let start = report.find(open).unwrap() + open.len();
    let end = report[start..].find("\n```").unwrap() + start;
    assert_eq!(&report[start..end], body);
}

#[test]
fn snapshots_appear_before_sections_tree_first() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "a").unwrap();
    let options = ReportBuilder::new(dir.path())
        .extensions(vec![".py".into()])
        .with_tree(true)
        .with_ls(true)
        .build();
    let (report, _) = render(&options, &StubTools);
    let tree_at = report.find("**tree:**").unwrap();
    let ls_at = report.find("**ls -lR:**").unwrap();
    let heading_at = report.find("\n# ").unwrap();
    assert!(tree_at < ls_at);
    assert!(ls_at < heading_at);
    assert!(report.contains("stub tree output"));
    assert!(report.contains("stub ls output"));
}

#[test]
fn snapshot_failure_embeds_error_and_run_completes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "a").unwrap();
    let options = ReportBuilder::new(dir.path())
        .extensions(vec![".py".into()])
        .with_tree(true)
        .with_ls(true)
        .build();
    let (report, summary) = render(&options, &FailingTools);
    assert!(report.contains("[!] failed to capture tree: tree: command not found"));
    assert!(report.contains("[!] failed to capture ls -lR: ls: command not found"));
    assert_eq!(summary.included, 1);
}

#[test]
fn files_within_a_directory_are_sorted() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("z.py"), "z").unwrap();
    fs::write(dir.path().join("a.py"), "a").unwrap();
    fs::write(dir.path().join("m.py"), "m").unwrap();
    let options = ReportBuilder::new(dir.path())
        .extensions(vec![".py".into()])
        .build();
    let (report, _) = render(&options, &StubTools);
    let a = report.find("**File:** a.py").unwrap();
    let m = report.find("**File:** m.py").unwrap();
    let z = report.find("**File:** z.py").unwrap();
    assert!(a < m && m < z);
}

#[test]
fn subdirectory_files_are_labeled_with_relative_path() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/a.py"), "a").unwrap();
    let options = ReportBuilder::new(dir.path())
        .extensions(vec![".py".into()])
        .build();
    let (report, _) = render(&options, &StubTools);
    assert!(report.contains("### sub"));
    assert!(report.contains("**File:** sub/a.py"));
}

#[test]
fn scan_yields_sections_in_walk_order() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("one")).unwrap();
    fs::create_dir(dir.path().join("two")).unwrap();
    fs::write(dir.path().join("one/a.py"), "a").unwrap();
    let options = ReportBuilder::new(dir.path()).build();
    let sections = scan(&options).unwrap();
    assert_eq!(sections[0].rel_path, "");
    assert_eq!(sections[1].rel_path, "one");
    assert_eq!(sections[1].files.len(), 1);
    assert_eq!(sections[2].rel_path, "two");
    assert!(sections[2].files.is_empty());
}

#[test]
fn missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let options = ReportBuilder::new(dir.path().join("no-such-dir")).build();
    let mut out = Vec::new();
    assert!(combine_to_writer(&options, &StubTools, &mut out).is_err());
}

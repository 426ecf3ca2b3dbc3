//! # Combcat
//!
//! `combcat` walks a directory tree and concatenates the text files it finds
//! into a single Markdown report, ready for review in Obsidian: one heading
//! per directory, one fenced code block per file (tagged with a language
//! inferred from the extension), and optional `tree` / `ls -lR` snapshots at
//! the top.
//!
//! Hidden entries (dot-prefixed) are always skipped, excluded directories are
//! pruned together with everything beneath them, and an optional extension
//! filter restricts which files are embedded. A file that cannot be read as
//! UTF-8 text gets a bracketed warning in place of its content; the run keeps
//! going and the final summary counts it as skipped.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use combcat::{ReportBuilder, combine};
//!
//! let options = ReportBuilder::new("./src")
//!     .extensions(vec![".py".into(), ".sh".into()])
//!     .exclude(vec!["build".into()])
//!     .with_tree(true)
//!     .build();
//!
//! let summary = combine(&options, "review.md").expect("report failed");
//! println!("included {}, skipped {}", summary.included, summary.skipped);
//! ```

mod engine;
mod error;
mod filter;
mod options;
mod report;
mod snapshot;
mod types;

pub use engine::scan;
pub use error::CombcatError;
pub use filter::PathClassifier;
pub use options::{ReportBuilder, ReportOptions};
pub use report::{ReportWriter, escape_filename, language_for};
pub use snapshot::{SnapshotTools, SystemTools};
pub use types::{DirSection, FileRecord, RunSummary};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Runs a full report: scan, snapshots, sections, summary — into `out`.
///
/// The snapshot commands come from `tools`, so callers (and tests) can supply
/// something other than the real `tree` and `ls` binaries.
pub fn combine_to_writer<W: Write>(
    options: &ReportOptions,
    tools: &dyn SnapshotTools,
    out: &mut W,
) -> Result<RunSummary, CombcatError> {
    let sections = scan(options)?;
    let mut writer = ReportWriter::new(out);
    writer.snapshots(options, tools)?;
    for section in &sections {
        writer.section(&options.root, section)?;
    }
    Ok(writer.finish()?)
}

/// Runs a full report into the file at `output`, using the system `tree` and
/// `ls` binaries for snapshots.
pub fn combine(
    options: &ReportOptions,
    output: impl AsRef<Path>,
) -> Result<RunSummary, CombcatError> {
    let output = output.as_ref();
    let file = File::create(output).map_err(|e| CombcatError::io(output, e))?;
    let mut out = BufWriter::new(file);
    let summary = combine_to_writer(options, &SystemTools, &mut out)?;
    out.flush().map_err(|e| CombcatError::io(output, e))?;
    Ok(summary)
}

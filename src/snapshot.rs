//! External snapshot capture for the top of the report.
//!
//! The report can embed the verbatim output of `tree` and `ls -lR`. The
//! commands are behind the [`SnapshotTools`] trait so tests can substitute
//! canned output instead of spawning real processes.

use crate::filter::normalize;
use std::io;
use std::path::Path;
use std::process::Command;

/// Produces the snapshot text blocks embedded at the top of a report.
pub trait SnapshotTools {
    /// A tree rendering of `root`, hiding dot-entries and the excluded
    /// directories.
    fn tree(&self, root: &Path, exclude: &[String]) -> io::Result<String>;
    /// A recursive long-format listing of `root`.
    fn long_listing(&self, root: &Path) -> io::Result<String>;
}

/// [`SnapshotTools`] backed by the system `tree` and `ls` binaries.
#[derive(Debug, Default)]
pub struct SystemTools;

impl SnapshotTools for SystemTools {
    fn tree(&self, root: &Path, exclude: &[String]) -> io::Result<String> {
        let mut pattern = String::from(".*");
        for excl in exclude {
            let normalized = normalize(excl);
            // tree -I matches entry names, so only the final segment applies.
            if let Some(last) = normalized.rsplit('/').next().filter(|s| !s.is_empty()) {
                pattern.push('|');
                pattern.push_str(last);
            }
        }
        let mut cmd = Command::new("tree");
        cmd.arg("-a").arg("-I").arg(pattern).arg(root);
        run(cmd)
    }

    fn long_listing(&self, root: &Path) -> io::Result<String> {
        let mut cmd = Command::new("ls");
        cmd.arg("-lR").arg(root);
        run(cmd)
    }
}

fn run(mut cmd: Command) -> io::Result<String> {
    let output = cmd.output()?;
    if !output.status.success() {
        return Err(io::Error::other(format!(
            "{}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

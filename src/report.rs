//! Markdown report rendering.
//!
//! Produces the Obsidian-flavored report: optional snapshot blocks, one
//! heading per visited directory, one fenced code block per file, and a
//! closing summary line. File content goes into the fences verbatim; a body
//! containing a triple-backtick sequence will break its fence, which is a
//! known limitation of the format.

use crate::options::ReportOptions;
use crate::snapshot::SnapshotTools;
use crate::types::{DirSection, RunSummary};
use std::fs;
use std::io::Write;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

const DIVIDER_WIDTH: usize = 40;

fn divider() -> String {
    "=".repeat(DIVIDER_WIDTH)
}

/// Streams report sections to `out`, accumulating the run counters.
///
/// Call [`snapshots`](ReportWriter::snapshots) first (if enabled), then
/// [`section`](ReportWriter::section) per directory in walk order, then
/// [`finish`](ReportWriter::finish) to write the summary and take the counts.
pub struct ReportWriter<'a, W: Write> {
    out: &'a mut W,
    summary: RunSummary,
}

impl<'a, W: Write> ReportWriter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            summary: RunSummary::default(),
        }
    }

    /// Embeds the enabled snapshot blocks: tree first, then the long listing.
    /// A failing tool embeds its error text in place of the block.
    pub fn snapshots(
        &mut self,
        options: &ReportOptions,
        tools: &dyn SnapshotTools,
    ) -> std::io::Result<()> {
        let sep = divider();
        if options.with_tree {
            let block = tools
                .tree(&options.root, &options.exclude)
                .unwrap_or_else(|e| format!("[!] failed to capture tree: {e}\n"));
            write!(self.out, "\n\n{sep}\n**tree:**\n\n\n```\n{block}\n```\n{sep}\n")?;
        }
        if options.with_ls {
            let block = tools
                .long_listing(&options.root)
                .unwrap_or_else(|e| format!("[!] failed to capture ls -lR: {e}\n"));
            write!(self.out, "\n\n{sep}\n**ls -lR:**\n\n\n```\n{block}\n```\n{sep}\n")?;
        }
        Ok(())
    }

    /// Writes one directory heading and the fenced blocks for its files.
    pub fn section(&mut self, root: &Path, section: &DirSection) -> std::io::Result<()> {
        let sep = divider();
        if section.rel_path.is_empty() {
            write!(self.out, "\n\n# {}\n{sep}\n", root_label(root))?;
        } else {
            write!(self.out, "\n\n### {}\n{sep}\n", section.rel_path)?;
        }
        for file in &section.files {
            let rel_file = if section.rel_path.is_empty() {
                file.name.clone()
            } else {
                format!("{}/{}", section.rel_path, file.name)
            };
            write!(
                self.out,
                "\n\n---\n\n**File:** {}\n\n---\n\n",
                escape_filename(&rel_file)
            )?;
            write!(self.out, "```{}\n", language_for(&file.name))?;
            match read_text(&file.path) {
                Ok(content) => {
                    self.out.write_all(content.as_bytes())?;
                    self.summary.included += 1;
                }
                Err(warning) => {
                    eprintln!("{}", warning.trim_end());
                    #[cfg(feature = "logging")]
                    tracing::debug!("skipping {}", file.path.display());
                    self.out.write_all(warning.as_bytes())?;
                    self.summary.skipped += 1;
                }
            }
            write!(self.out, "\n```\n")?;
        }
        Ok(())
    }

    /// Writes the closing divider and summary line, returning the counters.
    pub fn finish(self) -> std::io::Result<RunSummary> {
        let sep = divider();
        write!(
            self.out,
            "\n{sep}\n[report] files included: {}, skipped: {}\n{sep}\n",
            self.summary.included, self.summary.skipped
        )?;
        Ok(self.summary)
    }
}

/// Reads a file as UTF-8 text. Returns the in-fence warning line on any
/// failure; the run continues either way.
fn read_text(path: &Path) -> Result<String, String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return Err(format!(
                "[!] error processing file {}: {e}\n",
                path.display()
            ));
        }
    };
    let head = &bytes[..bytes.len().min(4096)];
    if content_inspector::inspect(head).is_binary() {
        return Err(not_text(path));
    }
    String::from_utf8(bytes).map_err(|_| not_text(path))
}

fn not_text(path: &Path) -> String {
    format!(
        "[!] could not read file (not text, likely binary): {}\n",
        path.display()
    )
}

fn root_label(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// Wraps a name in backticks when it would confuse Obsidian: spaces or
/// square brackets.
pub fn escape_filename(name: &str) -> String {
    if name.contains('[') || name.contains(']') || name.contains(' ') {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// Fence language tag for a file name, from its case-insensitive suffix.
/// Unmapped suffixes get no tag.
pub fn language_for(name: &str) -> &'static str {
    let Some(idx) = name.rfind('.') else { return "" };
    match name[idx..].to_lowercase().as_str() {
        ".py" => "python",
        ".sh" => "bash",
        ".js" => "javascript",
        ".html" => "html",
        ".css" => "css",
        ".php" => "php",
        ".yaml" | ".yml" => "yaml",
        ".ini" | ".service" | ".timer" => "ini",
        _ => "",
    }
}

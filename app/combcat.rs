//! Command-line interface for combcat.
//!
//! Walks the given source directory and writes one Markdown review report,
//! printing the effective configuration before the run and the final counts
//! after it.

use clap::Parser;
use combcat::{ReportBuilder, ReportOptions, combine};
use std::path::PathBuf;
use std::process::exit;

/// combcat — combine a directory of scripts into one Markdown review report
#[derive(Parser)]
#[command(name = "combcat", version, about, long_about = None)]
struct Cli {
    /// Root directory with the sources to combine
    input_dir: PathBuf,

    /// Output report file
    output_file: PathBuf,

    /// File extensions to include (matched case-insensitively as suffixes)
    #[arg(
        long,
        num_args = 1..,
        default_values_t = [".py", ".sh", ".yaml", ".js", ".html", ".css", ".php", ".service", ".timer"]
            .map(String::from)
    )]
    ext: Vec<String>,

    /// Embed an `ls -lR` snapshot at the top of the report
    #[arg(long)]
    ls: bool,

    /// Embed a `tree` snapshot at the top of the report
    #[arg(long)]
    tree: bool,

    /// Directories to exclude, relative to the input directory
    #[arg(long, num_args = 1..)]
    exclude: Vec<String>,
}

impl Cli {
    fn into_options(self) -> (ReportOptions, PathBuf) {
        let options = ReportBuilder::new(self.input_dir)
            .extensions(self.ext)
            .exclude(self.exclude)
            .with_ls(self.ls)
            .with_tree(self.tree)
            .build();
        (options, self.output_file)
    }
}

fn main() {
    let cli = Cli::parse();

    println!("[i] processing directory: {}", cli.input_dir.display());
    println!("[i] writing report to: {}", cli.output_file.display());
    println!("[i] including extensions: {}", cli.ext.join(" "));
    if cli.ls {
        println!("[i] embedding ls -lR snapshot");
    }
    if cli.tree {
        println!("[i] embedding tree snapshot");
    }
    if !cli.exclude.is_empty() {
        println!("[i] excluding directories: {}", cli.exclude.join(" "));
    }

    let (options, output) = cli.into_options();
    match combine(&options, &output) {
        Ok(summary) => {
            println!(
                "[ok] done: {} files included, {} skipped",
                summary.included, summary.skipped
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

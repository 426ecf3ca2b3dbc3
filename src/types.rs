use std::path::PathBuf;

/// A single qualifying file found during the walk.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// The file name, without any directory component.
    pub name: String,
    /// The full path to the file on disk.
    pub path: PathBuf,
}

/// One visited directory and the files it contributes to the report.
///
/// Sections appear in walk order. A section may hold zero files; it still
/// produces a heading in the report.
#[derive(Debug, Clone)]
pub struct DirSection {
    /// Path relative to the scan root, `/`-separated. Empty for the root itself.
    pub rel_path: String,
    /// Direct child files, lexicographic by name.
    pub files: Vec<FileRecord>,
}

/// Final accounting for a run, returned by the report writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files whose content was embedded in the report.
    pub included: usize,
    /// Files skipped because their content could not be read as text.
    pub skipped: usize,
}

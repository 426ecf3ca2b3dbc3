use std::path::PathBuf;
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Root directory of the scan.
    pub root: PathBuf,
    /// File-name suffixes to include, e.g. `".py"`. `None` allows every extension.
    pub extensions: Option<Vec<String>>,
    /// Directories to prune, relative to `root`.
    pub exclude: Vec<String>,
    /// Embed a `tree` snapshot at the top of the report.
    pub with_tree: bool,
    /// Embed an `ls -lR` snapshot at the top of the report.
    pub with_ls: bool,
}
impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: None,
            exclude: Vec::new(),
            with_tree: false,
            with_ls: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct ReportBuilder {
    options: ReportOptions,
}
impl ReportBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ReportOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Restrict the report to files matching one of the given suffixes.
    /// Matching is case-insensitive; pass the leading dot (`".py"`).
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.options.extensions = Some(extensions);
        self
    }
    pub fn all_extensions(mut self) -> Self {
        self.options.extensions = None;
        self
    }
    pub fn exclude(mut self, dirs: Vec<String>) -> Self {
        self.options.exclude = dirs;
        self
    }
    pub fn with_tree(mut self, yes: bool) -> Self {
        self.options.with_tree = yes;
        self
    }
    pub fn with_ls(mut self, yes: bool) -> Self {
        self.options.with_ls = yes;
        self
    }
    pub fn build(self) -> ReportOptions {
        self.options
    }
}

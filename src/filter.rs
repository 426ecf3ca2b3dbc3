//! Path classification rules: hidden names, excluded directories, extension filters.
//!
//! All matching is done on `/`-separated paths relative to the scan root. The
//! root itself has the empty relative path and is never hidden or excludable.

/// Decides whether a path is hidden, excluded, or fails the extension filter.
///
/// Exclusion matching is segment-based: `build` excludes `build` and
/// `build/sub`, but never `buildx`.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    excluded: Vec<Vec<String>>,
    extensions: Option<Vec<String>>,
}

impl PathClassifier {
    pub fn new(exclude: &[String], extensions: Option<&[String]>) -> Self {
        let excluded = exclude
            .iter()
            .map(|e| segments(&normalize(e)))
            .filter(|segs| !segs.is_empty())
            .collect();
        let extensions =
            extensions.map(|exts| exts.iter().map(|e| e.to_lowercase()).collect());
        Self {
            excluded,
            extensions,
        }
    }

    /// True if a single path component is hidden (starts with `.`).
    pub fn is_hidden_name(name: &str) -> bool {
        name.starts_with('.')
    }

    /// True if the root-relative path equals an exclusion entry or descends
    /// from one. The empty path (the root) is never excluded.
    pub fn is_excluded(&self, rel_path: &str) -> bool {
        if rel_path.is_empty() {
            return false;
        }
        let segs = segments(&normalize(rel_path));
        self.excluded
            .iter()
            .any(|excl| segs.len() >= excl.len() && segs[..excl.len()] == excl[..])
    }

    /// True if the file name passes the extension filter. With no filter
    /// configured, every name passes.
    pub fn matches_extension(&self, name: &str) -> bool {
        match &self.extensions {
            None => true,
            Some(exts) => {
                let lower = name.to_lowercase();
                exts.iter().any(|ext| lower.ends_with(ext.as_str()))
            }
        }
    }
}

/// Normalizes a relative path to `/` separators with no trailing separator.
pub(crate) fn normalize(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    while normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
        .strip_prefix("./")
        .map(str::to_owned)
        .unwrap_or(normalized)
}

fn segments(rel_path: &str) -> Vec<String> {
    rel_path
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .map(str::to_owned)
        .collect()
}

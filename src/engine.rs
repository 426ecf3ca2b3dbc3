use crate::error::CombcatError;
use crate::filter::PathClassifier;
use crate::options::ReportOptions;
use crate::types::{DirSection, FileRecord};
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

struct Walker {
    inner: ignore::Walk,
}

impl Walker {
    fn new(options: &ReportOptions, classifier: &PathClassifier) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let root = options.root.clone();
        let classifier = classifier.clone();
        // Pruning: rejecting a directory entry stops the descent into it, so
        // hidden and excluded subtrees are never enumerated.
        builder.filter_entry(move |entry| {
            let Ok(rel) = entry.path().strip_prefix(&root) else {
                return true;
            };
            if rel.as_os_str().is_empty() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if PathClassifier::is_hidden_name(&name) {
                return false;
            }
            !classifier.is_excluded(&rel.to_string_lossy().replace('\\', "/"))
        });
        Self {
            inner: builder.build(),
        }
    }
}

fn rel_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Walks the tree under `options.root` and groups qualifying files by the
/// directory that contains them.
///
/// Sections come back in top-down walk order; files within a section are
/// lexicographic by name. Directories with no qualifying files still get a
/// section. Any error while enumerating a directory aborts the whole scan.
pub fn scan(options: &ReportOptions) -> Result<Vec<DirSection>, CombcatError> {
    if !options.root.is_dir() {
        return Err(CombcatError::InvalidPath(
            options.root.display().to_string(),
        ));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("scanning {}", options.root.display());
    let classifier = PathClassifier::new(&options.exclude, options.extensions.as_deref());
    let walker = Walker::new(options, &classifier);

    let mut sections: Vec<DirSection> = Vec::new();
    let mut index: HashMap<PathBuf, usize> = HashMap::new();
    for result in walker.inner {
        let entry = result.map_err(|e| CombcatError::Walk(e.to_string()))?;
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        if is_dir {
            index.insert(entry.path().to_path_buf(), sections.len());
            sections.push(DirSection {
                rel_path: rel_path(&options.root, entry.path()),
                files: Vec::new(),
            });
        } else {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !classifier.matches_extension(&name) {
                #[cfg(feature = "logging")]
                tracing::debug!("extension filter drops {}", entry.path().display());
                continue;
            }
            let Some(parent) = entry.path().parent() else {
                continue;
            };
            if let Some(&i) = index.get(parent) {
                sections[i].files.push(FileRecord {
                    name,
                    path: entry.path().to_path_buf(),
                });
            }
        }
    }
    for section in &mut sections {
        section.files.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(sections)
}

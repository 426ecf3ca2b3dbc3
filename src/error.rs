use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CombcatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Report write error: {0}")]
    Write(#[from] std::io::Error),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
impl CombcatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombcatError::Io {
            path: path.into(),
            source,
        }
    }
}

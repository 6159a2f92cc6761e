//! Corpus scanning errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to walk resource directory")]
    Walk(#[from] walkdir::Error),

    #[error("malformed resource in `{0}`")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("`{path}` is a {found}, expected a {expected}")]
    UnexpectedType {
        path: PathBuf,
        expected: &'static str,
        found: String,
    },
}

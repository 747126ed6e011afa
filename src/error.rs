use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced at the crate boundary. The core search itself is
/// infallible once a `Board` and `Trie` have been constructed; everything
/// here is a rejected input or a failed load.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The caller handed us data that violates a precondition (non-square
    /// board, characters outside `a..=z`, empty word). Nothing partial is
    /// kept when this is returned.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed JSON document: {0}")]
    Malformed(#[from] serde_json::Error),
}

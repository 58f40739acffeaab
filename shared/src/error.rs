use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("surface has no pixels to export")]
    Empty,
    #[error("failed to encode snapshot: {0}")]
    Encode(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("unsupported color syntax: {0:?}")]
    Syntax(String),
    #[error("color component out of range in {0:?}")]
    Range(String),
}

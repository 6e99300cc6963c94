use thiserror::Error;

pub mod companion;
pub mod recap;

/// Errors raised while loading spec records from disk.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

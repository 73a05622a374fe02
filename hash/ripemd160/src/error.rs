use std::io;

/// Errors surfaced by the file hashing wrapper. Hashing in-memory data never
/// fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

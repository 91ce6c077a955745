use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordCountError {
    /// The only failure that gets a user-facing diagnostic before propagating.
    #[error("file '{}' was not found", path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read '{}'", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("'{}' is not valid UTF-8 text", path.display())]
    Encoding { path: PathBuf },
}

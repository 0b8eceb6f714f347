use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building an index. Any of them aborts the build.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The document list, the noise-word file or a listed document could not be opened.
    #[error("file not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but reading it failed.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            IndexError::NotFound { path, .. } | IndexError::Read { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool { matches!(self, IndexError::NotFound { .. }) }
}

pub type Result<T> = std::result::Result<T, IndexError>;

use std::path::PathBuf;

use thiserror::Error;

use crate::task::TaskError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Load failed from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Save failed to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupted task file {} at line {line}: {source}", path.display())]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: TaskError,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

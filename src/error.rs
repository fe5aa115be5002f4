use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("could not encode output: {0}")]
    Encode(String),

    #[error("duplicate project id '{0}'")]
    DuplicateProjectId(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("category '{0}' clashes with a built-in filter label")]
    ReservedCategory(String),

    #[error("category '{0}' matches more than one filter")]
    AmbiguousCategory(String),

    #[error("unsupported file type for {}, expected .json or .csv", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("could not set up logging: {0}")]
    Logging(String),

    #[error("unsupported shell: {0}. Use bash, zsh, or fish.")]
    UnsupportedShell(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl FolioError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FolioError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

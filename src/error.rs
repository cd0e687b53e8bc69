use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse page {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no page files found in directory: {0}")]
    NoPageFiles(PathBuf),

    #[error("catalog has no pages")]
    EmptyCatalog,

    #[error("page path must start with '/': {0:?}")]
    InvalidPath(String),

    #[error("page path registered twice: {0}")]
    DuplicatePath(String),

    #[error("no page registered for path: {0}")]
    UnknownPath(String),
}

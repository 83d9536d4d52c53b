use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatgrepError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot open '{name}': {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to scan '{name}': {source}")]
    Scan {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("an unexpected error occurred: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PatgrepError>;

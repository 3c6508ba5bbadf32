use crate::report::UnknownReport;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // Input files
    //-------------------------------------------------------------------------
    #[error("no log files given")]
    NoFiles,

    #[error("file '{path}' does not exist")]
    FileNotFound { path: PathBuf },

    #[error("'{path}' must be a file, not a directory")]
    NotAFile { path: PathBuf },

    #[error("no permission to read file '{path}': {source}")]
    FileNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Date filter
    //-------------------------------------------------------------------------
    #[error("invalid date '{value}', expected YYYY-DD-MM: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    //-------------------------------------------------------------------------
    // Report selection
    //-------------------------------------------------------------------------
    #[error(transparent)]
    UnknownReport(#[from] UnknownReport),
}

impl ConfigError {
    pub fn not_readable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotReadable {
            path: path.into(),
            source,
        }
    }
}

//! Library error type

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading corpora, resources and word lists
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A data row could not be split into the fields it must carry
    #[error("malformed row at line {line} of {source_name}: {reason}")]
    MalformedRow {
        /// File path or other label of the row source
        source_name: String,
        /// 1-based line number
        line: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// A file could not be opened, read or written
    #[error("i/o error on {path}: {source}")]
    Io {
        /// Path of the file involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A YAML resource or config file failed to parse
    #[error("invalid resource file {path}: {source}")]
    Resource {
        /// Path of the resource
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// No question heading marker was found in the scan window
    #[error("no heading marker within the first tokens of `{tokens}`")]
    HeadingNotFound {
        /// The scanned sentence, re-joined
        tokens: String,
    },
}

impl LexiconError {
    pub(crate) fn malformed(source_name: &str, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            source_name: source_name.to_string(),
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, LexiconError>;

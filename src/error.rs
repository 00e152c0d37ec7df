//! Error types for the translation store.
//!
//! Every fallible core operation returns [`Result`]. Host layers (the CLI) turn these into
//! user-facing messages and exit codes.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::store::StoreError;

#[derive(Debug, Error)]
pub enum Error {
    /// No collection file exists for the locale.
    #[error("Locale '{0}' does not exist")]
    LocaleNotFound(String),

    /// `add_locale` was called for a locale that already has a collection.
    #[error("Locale '{0}' already exists")]
    LocaleAlreadyExists(String),

    /// Locale identifier cannot be used as a collection name.
    #[error("Invalid locale identifier '{0}'")]
    InvalidLocale(String),

    /// Namespace is empty or contains the `::` separator.
    #[error("Invalid namespace '{0}'")]
    InvalidNamespace(String),

    /// Import source could not be opened for reading.
    #[error("{} is not readable", path.display())]
    NotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Export destination could not be opened for writing.
    #[error("{} is not writable", path.display())]
    NotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A JSON catalog or group file exists but is not a valid JSON object.
    #[error("Malformed translation catalog {}: {reason}", path.display())]
    MalformedCatalog { path: PathBuf, reason: String },

    /// A persisted locale collection could not be decoded.
    #[error("Stored collection for locale '{locale}' is corrupt")]
    CorruptCollection {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// A CSV row does not match the header layout.
    #[error("Malformed CSV row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// CSV encoding or decoding failure (I/O, invalid UTF-8) during export or import.
    #[error("CSV error")]
    Csv(#[from] csv::Error),

    /// Failure reported by the object store backend.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    pub fn malformed_catalog(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MalformedCatalog {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed_row(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

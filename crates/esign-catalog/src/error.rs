//! Error types for catalog construction and loading

use std::path::PathBuf;

/// Catalog errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two plans share an id
    #[error("duplicate plan id: {0}")]
    DuplicatePlanId(String),

    /// A plan has an empty id
    #[error("plan at position {position} has an empty id")]
    EmptyPlanId {
        /// 1-based position in the source list
        position: usize,
    },

    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Catalog file extension is not one we parse
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// Catalog text did not parse
    #[error("malformed catalog ({format}): {message}")]
    Malformed {
        /// Source format name
        format: &'static str,
        /// Parser message
        message: String,
    },
}

impl CatalogError {
    #[inline]
    pub(crate) fn malformed(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Malformed {
            format,
            message: err.to_string(),
        }
    }
}

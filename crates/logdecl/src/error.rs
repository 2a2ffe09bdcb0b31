use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Fatal errors raised while reading a catalog or writing generated artifacts.
///
/// Every variant aborts the run; there is no partial regeneration.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A non-comment, non-blank line did not match the five-field grammar.
    #[error("unable to match log message on line {line}: {text}")]
    Grammar { line: usize, text: String },

    /// The same identifier was defined twice and the caller asked for uniqueness.
    #[error(
        "duplicate log message identifier `{identifier}` on line {line} (first defined on line {first_line})"
    )]
    DuplicateIdentifier {
        identifier: String,
        first_line: usize,
        line: usize,
    },

    /// The catalog could not be read or an artifact could not be written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returned when a severity keyword is not one of `DEFAULT`, `INFO`, `ERROR` or `FAULT`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log severity `{0}`")]
pub struct UnknownSeverity(pub String);

//! Error type shared by the whole translator.
//!
//! Only structural problems end up here: a line without its `=`/`->`/`:`
//! separator, a term with no species name, a coefficient that is not a
//! number, and the I/O around the run. An unrecognized rate law is NOT an
//! error, it is reported through `Translation::unknowns`.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("missing '{separator}' separator in equation: {line}")]
    MissingSeparator { separator: &'static str, line: String },
    #[error("malformed term (no species name): '{0}'")]
    MalformedTerm(String),
    #[error("invalid coefficient '{coefficient}' in term '{term}'")]
    InvalidCoefficient { term: String, coefficient: String },
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

impl TranslatorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TranslatorError::Io {
            path: path.into(),
            source,
        }
    }
}

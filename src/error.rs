//! Error types for snippet storage and validation

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::snippet::SnippetId;

/// Result type alias for snippet operations
pub type Result<T> = std::result::Result<T, SnippetError>;

/// Snippet error types
#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snippet: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("No such snippet: {0}")]
    NotFound(SnippetId),

    #[error("Cannot read {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{path} holds more than one snippet with id {id}")]
    DuplicateId { path: PathBuf, id: SnippetId },

    #[error("Snippet ids exhausted")]
    IdsExhausted,

    #[error("Cannot encode snippet store: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Highlight source {0} is not available in this build")]
    SourceUnavailable(String),
}

/// A single rejected field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("code is required")]
    MissingCode,

    #[error("{field} is {actual} characters long, at most {max} allowed")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("unknown language {0:?}")]
    UnknownLanguage(String),

    #[error("unknown style {0:?}")]
    UnknownStyle(String),
}

/// Every field error found while validating one submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub(crate) fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Check whether a specific error was reported
    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

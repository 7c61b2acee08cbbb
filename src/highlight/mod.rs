//! Highlighting catalog sources
//!
//! This module describes what a syntax-highlighting library knows about:
//! - Lexers (display name, aliases, file extensions)
//! - Style (theme) names
//!
//! Catalogs of valid snippet languages and styles are built from a
//! [`HighlightSource`] once at startup.

mod builtin;
mod lexer;
#[cfg(feature = "syntect")]
mod syntect_source;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnippetError};

pub use builtin::BuiltinSource;
pub use lexer::LexerDefinition;
#[cfg(feature = "syntect")]
pub use syntect_source::SyntectSource;

/// Introspection surface of a syntax-highlighting library
pub trait HighlightSource {
    /// All lexer definitions, in whatever order the library keeps them
    fn lexers(&self) -> Vec<LexerDefinition>;

    /// All style names
    fn styles(&self) -> Vec<String>;
}

/// Which highlight source to build catalogs from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Builtin,
    Syntect,
}

impl SourceKind {
    /// Instantiate the source, if it was compiled in
    pub fn open(self) -> Result<Box<dyn HighlightSource>> {
        match self {
            SourceKind::Builtin => Ok(Box::new(BuiltinSource)),
            #[cfg(feature = "syntect")]
            SourceKind::Syntect => Ok(Box::new(SyntectSource::load_defaults())),
            #[cfg(not(feature = "syntect"))]
            SourceKind::Syntect => Err(SnippetError::SourceUnavailable(self.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Builtin => f.write_str("builtin"),
            SourceKind::Syntect => f.write_str("syntect"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "builtin" => Ok(SourceKind::Builtin),
            "syntect" => Ok(SourceKind::Syntect),
            other => Err(format!("unknown highlight source {other:?}")),
        }
    }
}

//! Built-in highlighting catalog
//!
//! A static registry of common lexers and style names, used when no
//! external highlighting library is compiled in.

mod lexers;
mod styles;

use super::lexer::LexerDefinition;
use super::HighlightSource;

/// Highlight source backed by the built-in registry
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl HighlightSource for BuiltinSource {
    fn lexers(&self) -> Vec<LexerDefinition> {
        lexers::all_lexers()
    }

    fn styles(&self) -> Vec<String> {
        styles::STYLES.iter().map(|s| s.to_string()).collect()
    }
}

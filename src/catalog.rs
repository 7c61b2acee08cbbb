//! Language and style catalogs
//!
//! A catalog is the closed set of values a snippet field may take. Both
//! catalogs are built once from a [`HighlightSource`] and never change
//! afterwards; the store holds them behind an `Arc` and checks membership
//! on every write.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::highlight::{BuiltinSource, HighlightSource, LexerDefinition};

/// One allowed value and its human-readable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Stored identifier (e.g., "python")
    pub value: String,
    /// Display label (e.g., "Python")
    pub label: String,
}

impl Choice {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A sorted, deduplicated set of choices
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    choices: Vec<Choice>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build the language catalog: one choice per lexer that has an alias,
    /// identified by its first alias, sorted by display name.
    pub fn languages(source: &dyn HighlightSource) -> Self {
        Self::from_lexers(&source.lexers())
    }

    fn from_lexers(lexers: &[LexerDefinition]) -> Self {
        let mut choices: Vec<Choice> = lexers
            .iter()
            .filter_map(|lexer| {
                let value = lexer.identifier()?;
                Some(Choice::new(value, lexer.name.as_str()))
            })
            .collect();
        choices.sort_by(|a, b| {
            a.label
                .cmp(&b.label)
                .then_with(|| a.value.cmp(&b.value))
        });
        Self::from_sorted(choices)
    }

    /// Build the style catalog: each style name paired with itself, sorted
    pub fn styles(source: &dyn HighlightSource) -> Self {
        let mut choices: Vec<Choice> = source
            .styles()
            .into_iter()
            .map(|name| Choice::new(name.clone(), name))
            .collect();
        choices.sort_by(|a, b| a.value.cmp(&b.value));
        Self::from_sorted(choices)
    }

    /// Drop repeated values, keeping the first occurrence
    fn from_sorted(choices: Vec<Choice>) -> Self {
        let mut seen = HashSet::new();
        let choices: Vec<Choice> = choices
            .into_iter()
            .filter(|choice| seen.insert(choice.value.clone()))
            .collect();
        let index = choices
            .iter()
            .enumerate()
            .map(|(i, choice)| (choice.value.clone(), i))
            .collect();
        Self { choices, index }
    }

    /// Check whether a value is allowed
    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    /// Get the display label for a value
    pub fn label(&self, value: &str) -> Option<&str> {
        self.index
            .get(value)
            .map(|&i| self.choices[i].label.as_str())
    }

    /// Iterate choices in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

/// Both catalogs, built together at startup
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub languages: Catalog,
    pub styles: Catalog,
    /// Lower-cased file extension to language identifier
    extensions: HashMap<String, String>,
}

impl Catalogs {
    /// Build catalogs from a highlight source
    pub fn build(source: &dyn HighlightSource) -> Self {
        let lexers = source.lexers();
        let languages = Catalog::from_lexers(&lexers);

        // First lexer to claim an extension keeps it
        let mut extensions = HashMap::new();
        for lexer in &lexers {
            let Some(id) = lexer.identifier().filter(|id| languages.contains(id)) else {
                continue;
            };
            for ext in &lexer.extensions {
                extensions
                    .entry(ext.to_lowercase())
                    .or_insert_with(|| id.to_string());
            }
        }

        let catalogs = Self {
            languages,
            styles: Catalog::styles(source),
            extensions,
        };

        if catalogs.languages.is_empty() || catalogs.styles.is_empty() {
            tracing::warn!(
                languages = catalogs.languages.len(),
                styles = catalogs.styles.len(),
                "highlight source reported an empty catalog; every snippet write will be rejected"
            );
        } else {
            tracing::debug!(
                languages = catalogs.languages.len(),
                styles = catalogs.styles.len(),
                "built highlight catalogs"
            );
        }

        catalogs
    }

    /// Build catalogs from the built-in registry
    pub fn builtin() -> Self {
        Self::build(&BuiltinSource)
    }

    /// Resolve a language identifier
    pub fn language(&self, value: &str) -> Option<Language> {
        self.languages
            .contains(value)
            .then(|| Language(value.to_string()))
    }

    /// Guess a language from a file name's extension
    pub fn detect_language(&self, path: &Path) -> Option<Language> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        self.extensions
            .get(&ext)
            .and_then(|id| self.language(id))
    }

    /// Resolve a style name
    pub fn style(&self, value: &str) -> Option<Style> {
        self.styles.contains(value).then(|| Style(value.to_string()))
    }
}

/// A language identifier that was present in the language catalog when written
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A style name that was present in the style catalog when written
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(String);

impl Style {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

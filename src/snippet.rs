//! Snippet records
//!
//! A [`NewSnippet`] is what a user submits. Validating it against the
//! catalogs yields a [`ValidSnippet`], which only the store can turn into a
//! stored [`Snippet`] by assigning an id and a creation time.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalogs, Language, Style};
use crate::error::{ValidationError, ValidationErrors};

/// Maximum title length, in characters
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum language/style identifier length, in characters
pub const CHOICE_MAX_LEN: usize = 100;

pub const DEFAULT_LANGUAGE: &str = "python";
pub const DEFAULT_STYLE: &str = "friendly";

/// Storage-assigned snippet identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(u64);

impl SnippetId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values applied to fields a submission leaves out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub language: String,
    pub style: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

/// An unvalidated snippet submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewSnippet {
    pub title: Option<String>,
    pub code: Option<String>,
    pub linenos: Option<bool>,
    pub language: Option<String>,
    pub style: Option<String>,
}

impl NewSnippet {
    /// Create a submission with just code; everything else defaulted
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Default::default()
        }
    }

    /// Builder: set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set line numbering
    pub fn with_linenos(mut self, linenos: bool) -> Self {
        self.linenos = Some(linenos);
        self
    }

    /// Builder: set language identifier
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builder: set style name
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Apply defaults and check every field, reporting all failures at once
    pub fn validate(
        self,
        catalogs: &Catalogs,
        defaults: &Defaults,
    ) -> Result<ValidSnippet, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = self.title.unwrap_or_default();
        check_len(&mut errors, "title", &title, TITLE_MAX_LEN);

        let code = match self.code {
            Some(code) if !code.is_empty() => code,
            _ => {
                errors.push(ValidationError::MissingCode);
                String::new()
            }
        };

        let language_value = self.language.unwrap_or_else(|| defaults.language.clone());
        check_len(&mut errors, "language", &language_value, CHOICE_MAX_LEN);
        let language = catalogs.language(&language_value);
        if language.is_none() {
            errors.push(ValidationError::UnknownLanguage(language_value));
        }

        let style_value = self.style.unwrap_or_else(|| defaults.style.clone());
        check_len(&mut errors, "style", &style_value, CHOICE_MAX_LEN);
        let style = catalogs.style(&style_value);
        if style.is_none() {
            errors.push(ValidationError::UnknownStyle(style_value));
        }

        match (language, style) {
            (Some(language), Some(style)) if errors.is_empty() => Ok(ValidSnippet {
                title,
                code,
                linenos: self.linenos.unwrap_or(false),
                language,
                style,
            }),
            _ => Err(errors),
        }
    }
}

fn check_len(errors: &mut ValidationErrors, field: &'static str, value: &str, max: usize) {
    let actual = value.chars().count();
    if actual > max {
        errors.push(ValidationError::TooLong { field, max, actual });
    }
}

/// A submission that passed validation, waiting for an id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSnippet {
    pub(crate) title: String,
    pub(crate) code: String,
    pub(crate) linenos: bool,
    pub(crate) language: Language,
    pub(crate) style: Style,
}

impl ValidSnippet {
    pub(crate) fn into_snippet(self, id: SnippetId, created: DateTime<Utc>) -> Snippet {
        Snippet {
            id,
            created,
            title: self.title,
            code: self.code,
            linenos: self.linenos,
            language: self.language,
            style: self.style,
        }
    }
}

/// A stored snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    id: SnippetId,
    created: DateTime<Utc>,
    #[serde(default)]
    title: String,
    code: String,
    #[serde(default)]
    linenos: bool,
    language: Language,
    style: Style,
}

impl Snippet {
    pub fn id(&self) -> SnippetId {
        self.id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn linenos(&self) -> bool {
        self.linenos
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn style(&self) -> &Style {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogs() -> Catalogs {
        Catalogs::builtin()
    }

    #[test]
    fn test_defaults_applied() {
        let valid = NewSnippet::new("print(1)")
            .validate(&catalogs(), &Defaults::default())
            .unwrap();

        assert_eq!(valid.title, "");
        assert_eq!(valid.code, "print(1)");
        assert!(!valid.linenos);
        assert_eq!(valid.language.as_str(), "python");
        assert_eq!(valid.style.as_str(), "friendly");
    }

    #[test]
    fn test_explicit_fields_kept() {
        let valid = NewSnippet::new("fn main() {}")
            .with_title("hello")
            .with_linenos(true)
            .with_language("rust")
            .with_style("monokai")
            .validate(&catalogs(), &Defaults::default())
            .unwrap();

        assert_eq!(valid.title, "hello");
        assert!(valid.linenos);
        assert_eq!(valid.language.as_str(), "rust");
        assert_eq!(valid.style.as_str(), "monokai");
    }

    #[test]
    fn test_missing_code() {
        let errors = NewSnippet::default()
            .validate(&catalogs(), &Defaults::default())
            .unwrap_err();
        assert!(errors.contains(&ValidationError::MissingCode));

        let errors = NewSnippet::new("")
            .validate(&catalogs(), &Defaults::default())
            .unwrap_err();
        assert!(errors.contains(&ValidationError::MissingCode));
    }

    #[test]
    fn test_title_length() {
        let ok = NewSnippet::new("x").with_title("é".repeat(TITLE_MAX_LEN));
        assert!(ok.validate(&catalogs(), &Defaults::default()).is_ok());

        let long = NewSnippet::new("x").with_title("a".repeat(TITLE_MAX_LEN + 1));
        let errors = long.validate(&catalogs(), &Defaults::default()).unwrap_err();
        assert_eq!(
            errors.iter().next(),
            Some(&ValidationError::TooLong {
                field: "title",
                max: TITLE_MAX_LEN,
                actual: TITLE_MAX_LEN + 1,
            })
        );
    }

    #[test]
    fn test_unknown_choices_all_reported() {
        let errors = NewSnippet::default()
            .with_language("klingon")
            .with_style("neon")
            .validate(&catalogs(), &Defaults::default())
            .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::UnknownLanguage("klingon".to_string())));
        assert!(errors.contains(&ValidationError::UnknownStyle("neon".to_string())));
    }

    #[test]
    fn test_alias_is_not_identifier() {
        let errors = NewSnippet::new("x")
            .with_language("py")
            .validate(&catalogs(), &Defaults::default())
            .unwrap_err();
        assert!(errors.contains(&ValidationError::UnknownLanguage("py".to_string())));
    }

    #[test]
    fn test_bad_default_rejected_at_write() {
        let defaults = Defaults {
            language: "cobol".to_string(),
            style: DEFAULT_STYLE.to_string(),
        };
        let errors = NewSnippet::new("x")
            .validate(&catalogs(), &defaults)
            .unwrap_err();
        assert!(errors.contains(&ValidationError::UnknownLanguage("cobol".to_string())));
    }

    #[test]
    fn test_empty_catalogs_reject_everything() {
        let errors = NewSnippet::new("print(1)")
            .validate(&Catalogs::default(), &Defaults::default())
            .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_new_snippet_deserialize_defaults() {
        let new: NewSnippet = toml::from_str("code = \"print(1)\"").unwrap();
        assert_eq!(new, NewSnippet::new("print(1)"));

        assert!(toml::from_str::<NewSnippet>("colour = \"red\"").is_err());
    }
}

//! snippets - code-paste records validated against highlighting catalogs
//!
//! A snippet is a title, some code, a line-numbering flag, a language and a
//! display style. The allowed languages and styles come from catalogs built
//! once at startup from a highlighting source.

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod highlight;
pub mod snippet;
pub mod store;

pub use catalog::{Catalog, Catalogs, Choice, Language, Style};
pub use config::Config;
pub use error::{Result, SnippetError, ValidationError, ValidationErrors};
pub use highlight::{BuiltinSource, HighlightSource, LexerDefinition, SourceKind};
pub use snippet::{Defaults, NewSnippet, Snippet, SnippetId, ValidSnippet};
pub use store::SnippetStore;

//! Highlight source backed by syntect's bundled syntaxes and themes

use ::syntect::highlighting::ThemeSet;
use ::syntect::parsing::SyntaxSet;

use super::lexer::LexerDefinition;
use super::HighlightSource;

/// Highlight source that introspects syntect
pub struct SyntectSource {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl SyntectSource {
    /// Load syntect's default syntax and theme sets
    pub fn load_defaults() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }
}

/// Turn a display name into an alias ("Graphviz (DOT)" -> "graphviz(dot)")
fn slug(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl HighlightSource for SyntectSource {
    fn lexers(&self) -> Vec<LexerDefinition> {
        self.syntaxes
            .syntaxes()
            .iter()
            .filter(|syntax| !syntax.hidden)
            .map(|syntax| {
                let mut lexer = LexerDefinition::new(&syntax.name);
                lexer.add_alias(&slug(&syntax.name));
                for ext in &syntax.file_extensions {
                    lexer.add_alias(ext);
                    lexer.add_extension(ext);
                }
                lexer
            })
            .collect()
    }

    fn styles(&self) -> Vec<String> {
        self.themes.themes.keys().cloned().collect()
    }
}

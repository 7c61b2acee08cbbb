//! Lexer definitions as reported by a highlighting library

/// One lexer known to a highlighting library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerDefinition {
    /// Display name (e.g., "Python", "C++")
    pub name: String,
    /// Short names the lexer answers to; the first one is canonical
    pub aliases: Vec<String>,
    /// File extensions (e.g., ["py", "pyw"])
    pub extensions: Vec<String>,
}

impl LexerDefinition {
    /// Create a new lexer definition with no aliases
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            extensions: Vec::new(),
        }
    }

    /// Add an alias
    pub fn add_alias(&mut self, alias: &str) {
        self.aliases.push(alias.to_string());
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Builder: add an alias
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.add_alias(alias);
        self
    }

    /// Builder: add a file extension
    pub fn with_extension(mut self, ext: &str) -> Self {
        self.add_extension(ext);
        self
    }

    /// Canonical identifier, if the lexer declares any alias
    pub fn identifier(&self) -> Option<&str> {
        self.aliases.first().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_is_first_alias() {
        let lexer = LexerDefinition::new("Python")
            .with_alias("python")
            .with_alias("py")
            .with_extension("py");

        assert_eq!(lexer.identifier(), Some("python"));
        assert_eq!(lexer.extensions, vec!["py".to_string()]);
    }

    #[test]
    fn test_no_alias_no_identifier() {
        let lexer = LexerDefinition::new("Anonymous");
        assert_eq!(lexer.identifier(), None);
    }
}

//! Built-in lexer definitions

use crate::highlight::lexer::LexerDefinition;

/// (display name, aliases, file extensions)
type LexerEntry = (&'static str, &'static [&'static str], &'static [&'static str]);

const LEXERS: &[LexerEntry] = &[
    ("ABAP", &["abap"], &["abap"]),
    ("Bash", &["bash", "sh", "ksh", "zsh", "shell"], &["sh", "bash", "zsh", "ksh"]),
    ("Batchfile", &["batch", "bat", "dosbatch", "winbatch"], &["bat", "cmd"]),
    ("C", &["c"], &["c", "h"]),
    ("C#", &["csharp", "c#", "cs"], &["cs"]),
    ("C++", &["cpp", "c++"], &["cpp", "hpp", "cc", "cxx", "hxx"]),
    ("CSS", &["css"], &["css"]),
    ("Clojure", &["clojure", "clj"], &["clj", "cljs"]),
    ("Dart", &["dart"], &["dart"]),
    ("Diff", &["diff", "udiff"], &["diff", "patch"]),
    ("Django/Jinja", &["django", "jinja"], &[]),
    ("Docker", &["docker", "dockerfile"], &["dockerfile"]),
    ("Elixir", &["elixir", "ex", "exs"], &["ex", "exs"]),
    ("Erlang", &["erlang"], &["erl", "hrl"]),
    ("Go", &["go", "golang"], &["go"]),
    ("GraphQL", &["graphql"], &["graphql"]),
    ("HTML", &["html"], &["html", "htm", "xhtml"]),
    ("Haskell", &["haskell", "hs"], &["hs"]),
    ("INI", &["ini", "cfg", "dosini"], &["ini", "cfg"]),
    ("JSON", &["json", "json-object"], &["json"]),
    ("Java", &["java"], &["java"]),
    ("JavaScript", &["javascript", "js"], &["js", "mjs", "cjs"]),
    ("Julia", &["julia", "jl"], &["jl"]),
    ("Kotlin", &["kotlin"], &["kt", "kts"]),
    ("Lua", &["lua"], &["lua"]),
    ("Makefile", &["make", "makefile", "mf", "bsdmake"], &["mk", "mak"]),
    ("Markdown", &["markdown", "md"], &["md", "markdown"]),
    ("Nix", &["nixos", "nix"], &["nix"]),
    ("OCaml", &["ocaml"], &["ml", "mli"]),
    ("Objective-C", &["objective-c", "objectivec", "obj-c", "objc"], &["m"]),
    ("PHP", &["php", "php3", "php4", "php5"], &["php"]),
    ("Perl", &["perl", "pl"], &["pl", "pm"]),
    ("PowerShell", &["powershell", "pwsh", "posh", "ps1", "psm1"], &["ps1", "psm1"]),
    ("Python", &["python", "py", "sage", "python3", "py3"], &["py", "pyw", "pyi"]),
    ("Python 2.x", &["python2", "py2"], &[]),
    ("Python Traceback", &["pytb", "py3tb"], &["pytb"]),
    ("Python console session", &["pycon", "python-console"], &[]),
    ("Ruby", &["ruby", "rb", "duby"], &["rb", "rake", "gemspec"]),
    ("Rust", &["rust", "rs"], &["rs"]),
    ("S", &["splus", "s", "r"], &["r", "s"]),
    ("SQL", &["sql"], &["sql"]),
    ("Scala", &["scala"], &["scala"]),
    ("Swift", &["swift"], &["swift"]),
    ("TOML", &["toml"], &["toml"]),
    ("Text only", &["text"], &["txt"]),
    ("TypeScript", &["typescript", "ts"], &["ts", "mts"]),
    ("XML", &["xml"], &["xml", "xsl", "xsd"]),
    ("YAML", &["yaml"], &["yaml", "yml"]),
];

/// Get all built-in lexer definitions
pub(super) fn all_lexers() -> Vec<LexerDefinition> {
    LEXERS
        .iter()
        .map(|(name, aliases, extensions)| {
            let mut lexer = LexerDefinition::new(name);
            for alias in aliases.iter() {
                lexer.add_alias(alias);
            }
            for ext in extensions.iter() {
                lexer.add_extension(ext);
            }
            lexer
        })
        .collect()
}

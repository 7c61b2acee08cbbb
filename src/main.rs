//! snippets - store, list and delete code snippets from the command line

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use snippets::display::{format_catalog, format_list, format_snippet};
use snippets::{Catalogs, Config, NewSnippet, Result, SnippetId, SnippetStore};

#[derive(Debug, Parser)]
#[command(name = "snippets", version, about = "Store and list code snippets")]
struct Cli {
    /// Config file (default: ~/.snippets.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Snippet store file, overriding the config
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a snippet, reading code from FILE or stdin; the language is
    /// guessed from FILE's extension when not given
    Add {
        /// Source file ("-" or omitted for stdin)
        file: Option<PathBuf>,
        #[arg(long)]
        title: Option<String>,
        /// Show line numbers when displayed
        #[arg(long)]
        linenos: bool,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        style: Option<String>,
    },
    /// List snippets, oldest first
    List,
    /// Show one snippet
    Show { id: u64 },
    /// Delete a snippet
    Delete { id: u64 },
    /// List valid languages
    Languages,
    /// List valid styles
    Styles,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Catalogs are built once and shared with the store
    let source = config.source.open()?;
    let catalogs = Arc::new(Catalogs::build(source.as_ref()));
    let defaults = config.defaults();
    if !catalogs.languages.contains(&defaults.language) {
        tracing::warn!(language = %defaults.language, "default language is not in the catalog");
    }
    if !catalogs.styles.contains(&defaults.style) {
        tracing::warn!(style = %defaults.style, "default style is not in the catalog");
    }

    match cli.command {
        Command::Languages => {
            print!("{}", format_catalog(&catalogs.languages));
            return Ok(());
        }
        Command::Styles => {
            print!("{}", format_catalog(&catalogs.styles));
            return Ok(());
        }
        _ => {}
    }

    let store_path = cli.store.clone().unwrap_or_else(|| config.store_path());
    let mut store = SnippetStore::open(store_path, catalogs, defaults)?;

    match cli.command {
        Command::Add {
            file,
            title,
            linenos,
            language,
            style,
        } => {
            let language = language.or_else(|| {
                let path = file.as_deref()?;
                let detected = store.catalogs().detect_language(path)?;
                tracing::info!(language = %detected, "detected language from file name");
                Some(detected.as_str().to_string())
            });
            let code = read_code(file)?;
            let new = NewSnippet {
                title,
                code: Some(code),
                linenos: linenos.then_some(true),
                language,
                style,
            };
            let snippet = store.create(new)?;
            println!("{}", snippet.id());
        }
        Command::List => print!("{}", format_list(&store.list())),
        Command::Show { id } => {
            let snippet = store.get(SnippetId::new(id))?;
            print!("{}", format_snippet(snippet, store.catalogs()));
        }
        Command::Delete { id } => {
            let snippet = store.delete(SnippetId::new(id))?;
            println!("deleted {}", snippet.id());
        }
        Command::Languages | Command::Styles => {}
    }

    Ok(())
}

/// Read snippet code from a file, or stdin for "-" / no file
fn read_code(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::parse_from([
            "snippets", "-vv", "add", "main.rs", "--language", "rust", "--linenos",
        ]);

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Add {
                file,
                linenos,
                language,
                title,
                style,
            } => {
                assert_eq!(file, Some(PathBuf::from("main.rs")));
                assert!(linenos);
                assert_eq!(language.as_deref(), Some("rust"));
                assert!(title.is_none());
                assert!(style.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_read_code_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.py");
        fs::write(&path, "print('hi')\n").unwrap();

        assert_eq!(read_code(Some(path)).unwrap(), "print('hi')\n");
    }
}

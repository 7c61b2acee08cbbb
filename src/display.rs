//! Plain-text rendering of snippets and catalogs for the command line

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::catalog::{Catalog, Catalogs};
use crate::snippet::Snippet;

/// Widest title shown in a listing
const TITLE_COLUMN: usize = 40;

/// Format snippets as an aligned table, one row per snippet
pub fn format_list(snippets: &[&Snippet]) -> String {
    let mut out = String::new();
    let lang_width = snippets
        .iter()
        .map(|s| s.language().as_str().width())
        .chain(std::iter::once("LANGUAGE".len()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "{:>5}  {:<20}  {}  TITLE",
        "ID",
        "CREATED",
        pad_to_width("LANGUAGE", lang_width)
    );
    for snippet in snippets {
        let title = if snippet.title().is_empty() {
            "(untitled)".to_string()
        } else {
            truncate_to_width(snippet.title(), TITLE_COLUMN)
        };
        let _ = writeln!(
            out,
            "{:>5}  {:<20}  {}  {}",
            snippet.id().get(),
            snippet.created().format("%Y-%m-%d %H:%M:%S").to_string(),
            pad_to_width(snippet.language().as_str(), lang_width),
            title
        );
    }
    out
}

/// Format one snippet: a header followed by its code
pub fn format_snippet(snippet: &Snippet, catalogs: &Catalogs) -> String {
    let mut out = String::new();
    let title = if snippet.title().is_empty() {
        "(untitled)"
    } else {
        snippet.title()
    };
    let _ = writeln!(out, "#{} {}", snippet.id(), title);
    // Records written before a catalog change may no longer have a label
    let language = catalogs
        .languages
        .label(snippet.language().as_str())
        .unwrap_or(snippet.language().as_str());
    let _ = writeln!(
        out,
        "created {}  language {}  style {}",
        snippet.created().to_rfc3339(),
        language,
        snippet.style()
    );
    out.push('\n');

    let line_count = snippet.code().lines().count();
    let gutter = line_number_width(line_count);
    for (i, line) in snippet.code().lines().enumerate() {
        if snippet.linenos() {
            let _ = write!(out, "{:>width$} ", i + 1, width = gutter - 1);
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Format a catalog as "value  label" rows
pub fn format_catalog(catalog: &Catalog) -> String {
    let width = catalog.iter().map(|c| c.value.width()).max().unwrap_or(0);
    let mut out = String::new();
    for choice in catalog.iter() {
        if choice.value == choice.label {
            let _ = writeln!(out, "{}", choice.value);
        } else {
            let _ = writeln!(out, "{}  {}", pad_to_width(&choice.value, width), choice.label);
        }
    }
    out
}

/// Width needed for line numbers (including separator)
fn line_number_width(line_count: usize) -> usize {
    let digits = line_count.max(1).to_string().len();
    digits.max(3) + 1 // minimum 3 digits + space
}

/// Pad a string with spaces to a display width
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = s.to_string();
    for _ in s.width()..width {
        result.push(' ');
    }
    result
}

/// Truncate a string to fit within a display width, marking the cut with '…'
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width + 1 > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::snippet::{Defaults, NewSnippet, SnippetId};
    use chrono::{TimeZone, Utc};

    fn snippet(new: NewSnippet) -> Snippet {
        new.validate(&Catalogs::builtin(), &Defaults::default())
            .unwrap()
            .into_snippet(
                SnippetId::new(7),
                Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            )
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // Wide characters take two columns each
        assert_eq!(truncate_to_width("日本語のタイトル", 7), "日本語…");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("go", 4), "go  ");
        assert_eq!(pad_to_width("python", 4), "python");
    }

    #[test]
    fn test_format_list() {
        let s = snippet(NewSnippet::new("x").with_title("Greeting"));
        let out = format_list(&[&s]);
        let mut lines = out.lines();

        assert!(lines.next().unwrap().contains("TITLE"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("    7  2024-05-01 12:30:00"));
        assert!(row.contains("python"));
        assert!(row.ends_with("Greeting"));
    }

    #[test]
    fn test_format_snippet_line_numbers() {
        let catalogs = Catalogs::builtin();
        let plain = format_snippet(&snippet(NewSnippet::new("a\nb")), &catalogs);
        assert!(plain.ends_with("\na\nb\n"));
        assert!(plain.starts_with("#7 (untitled)\n"));
        assert!(plain.contains("language Python  style friendly"));

        let numbered = snippet(NewSnippet::new("a\nb").with_linenos(true));
        let numbered = format_snippet(&numbered, &catalogs);
        assert!(numbered.ends_with("\n  1 a\n  2 b\n"));
    }

    #[test]
    fn test_format_snippet_without_label() {
        let s = snippet(NewSnippet::new("x").with_language("rust"));
        let out = format_snippet(&s, &Catalogs::default());
        assert!(out.contains("language rust  style friendly"));
    }

    #[test]
    fn test_format_catalog() {
        let catalogs = Catalogs::builtin();

        let languages = format_catalog(&catalogs.languages);
        assert!(languages.lines().any(|l| l.starts_with("python") && l.ends_with("Python")));

        let styles = format_catalog(&catalogs.styles);
        assert!(styles.lines().any(|l| l == "friendly"));
    }
}

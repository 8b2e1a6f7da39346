//! Inline span handling inside description, note and example lines.
//!
//! Each handler receives the line text after its marker and walks it once,
//! left to right, switching span state on delimiter characters. Spans still
//! open at the end of the line are closed there.

use super::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DescriptionSpan {
    Prose,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExampleSpan {
    Command,
    Emphasis,
}

impl ExampleSpan {
    fn toggled(self) -> Self {
        match self {
            ExampleSpan::Command => ExampleSpan::Emphasis,
            ExampleSpan::Emphasis => ExampleSpan::Command,
        }
    }

    fn accent(self, palette: &Palette) -> &'static str {
        match self {
            ExampleSpan::Command => palette.command,
            ExampleSpan::Emphasis => palette.emphasis,
        }
    }
}

/// Description prose: `<...>` is underlined, backticks become quotes.
pub(super) fn description(out: &mut String, text: &str, palette: &Palette) {
    let mut span = DescriptionSpan::Prose;
    out.push_str(palette.description);

    for c in text.chars() {
        match (span, c) {
            (DescriptionSpan::Prose, '<') => {
                out.push_str(palette.link);
                span = DescriptionSpan::Link;
            }
            (DescriptionSpan::Link, '>') => {
                out.push_str(palette.reset);
                span = DescriptionSpan::Prose;
            }
            (_, '`') => out.push('"'),
            (_, c) => out.push(c),
        }
    }

    if span == DescriptionSpan::Link {
        out.push_str(palette.reset);
    }
}

/// Note prose: backticks become quotes, nothing else changes.
pub(super) fn note(out: &mut String, text: &str, palette: &Palette) {
    out.push_str(palette.note);
    out.extend(text.chars().map(|c| if c == '`' { '"' } else { c }));
    out.push('\n');
}

/// Example line, starting at its opening backtick.
///
/// The last backtick on the line closes the example; backticks between the
/// two toggle emphasis. No backtick reaches the output.
pub(super) fn example(out: &mut String, line: &str, palette: &Palette) -> Result<(), &'static str> {
    let body = line.strip_prefix('`').unwrap_or(line);
    let close = body
        .rfind('`')
        .ok_or("example is missing its closing backtick")?;
    let (mut rest, trailer) = (&body[..close], &body[close + 1..]);

    out.push_str(palette.example);
    out.push_str(palette.command);

    let mut span = ExampleSpan::Command;
    while let Some(c) = rest.chars().next() {
        if c == '`' {
            span = span.toggled();
            out.push_str(palette.reset);
            out.push_str(span.accent(palette));
            rest = &rest[1..];
        } else if let Some(inner) = placeholder(rest) {
            out.push_str(palette.placeholder_open);
            out.push_str(inner);
            out.push_str(palette.placeholder_close);
            out.push_str(span.accent(palette));
            rest = &rest[inner.len() + 4..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    out.push_str(palette.reset);
    out.push_str(trailer);
    out.push_str(palette.example_end);
    Ok(())
}

/// Inner text of a `{{...}}` placeholder at the start of `text`.
///
/// A placeholder never spans a backtick, so emphasis toggles stay intact.
fn placeholder(text: &str) -> Option<&str> {
    let inner = text.strip_prefix("{{")?;
    let inner = &inner[..inner.find("}}")?];
    if inner.contains('`') {
        return None;
    }
    Some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ansi() -> &'static Palette {
        Palette::ansi()
    }

    #[test]
    fn description_link_underlined() {
        let mut out = String::new();
        description(&mut out, "See <https://example.com>.", ansi());
        let p = ansi();
        assert_eq!(
            out,
            format!("{}See {}https://example.com{}.", p.description, p.link, p.reset)
        );
    }

    #[test]
    fn description_unclosed_link_reset() {
        let mut out = String::new();
        description(&mut out, "a <b", ansi());
        assert!(out.ends_with(&format!("{}b{}", ansi().link, ansi().reset)));
    }

    #[test]
    fn description_stray_close_is_literal() {
        let mut out = String::new();
        description(&mut out, "a > b", Palette::plain());
        assert_eq!(out, "► a > b");
    }

    #[test]
    fn description_backticks_quoted() {
        let mut out = String::new();
        description(&mut out, "Use `ls` here.", Palette::plain());
        assert_eq!(out, "► Use \"ls\" here.");
    }

    #[test]
    fn note_backticks_quoted() {
        let mut out = String::new();
        note(&mut out, "List `.hidden` files:", Palette::plain());
        assert_eq!(out, "• List \".hidden\" files:\n");
    }

    #[test]
    fn example_nested_emphasis() {
        let p = ansi();
        let mut out = String::new();
        example(&mut out, "`cmd `arg` more`", p).unwrap();
        assert!(out.contains(&format!("{}arg{}", p.emphasis, p.reset)));
        assert!(out.contains(&format!("{}cmd ", p.command)));
        assert!(!out.contains('`'));
    }

    #[test]
    fn example_unclosed_emphasis_closed_at_end() {
        let p = ansi();
        let mut out = String::new();
        example(&mut out, "`cmd `arg more`", p).unwrap();
        assert!(out.contains(&format!("{}arg more{}", p.emphasis, p.reset)));
        assert!(!out.contains('`'));
    }

    #[test]
    fn example_placeholder_underlined() {
        let p = ansi();
        let mut out = String::new();
        example(&mut out, "`cp {{source}} {{target}}`", p).unwrap();
        assert!(out.contains(&format!(
            "{}source{}{}",
            p.placeholder_open, p.placeholder_close, p.command
        )));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn example_plain() {
        let mut out = String::new();
        example(&mut out, "`tar -xf {{archive.tar}}`", Palette::plain()).unwrap();
        assert_eq!(out, "   $ tar -xf {{archive.tar}}\n\n");
    }

    #[test]
    fn example_plain_keeps_placeholder_braces() {
        let mut out = String::new();
        example(&mut out, "`cp {{source}} dest`", Palette::plain()).unwrap();
        assert_eq!(out, "   $ cp {{source}} dest\n\n");
    }

    #[test]
    fn example_placeholder_does_not_span_backtick() {
        let p = ansi();
        let mut out = String::new();
        example(&mut out, "`cmd {{a`b}} x`", p).unwrap();
        assert_eq!(out.matches('`').count(), 0);
        assert!(!out.contains(p.placeholder_open));
        assert!(out.contains(&format!("{{{{a{}{}b}}}}", p.reset, p.emphasis)));
    }

    #[test]
    fn example_unmatched_braces_literal() {
        let mut out = String::new();
        example(&mut out, "`echo {{oops`", Palette::plain()).unwrap();
        assert_eq!(out, "   $ echo {{oops\n\n");
    }

    #[test]
    fn example_without_closer_fails() {
        let mut out = String::new();
        assert!(example(&mut out, "`ls -1", ansi()).is_err());
        assert!(example(&mut out, "`", ansi()).is_err());
    }

    #[test]
    fn example_multibyte_text() {
        let mut out = String::new();
        example(&mut out, "`echo héllo ✓`", Palette::plain()).unwrap();
        assert_eq!(out, "   $ echo héllo ✓\n\n");
    }
}

//! Page renderer — markup to terminal text in a single pass.
//!
//! Each line is classified by its first character and handed to one
//! handler, which consumes exactly that line:
//!
//! - `#` title, underlined with one dash per character
//! - `>` description, with `<...>` links and backtick quotes
//! - `-` note (bullet), with backtick quotes
//! - `` ` `` example, with nested emphasis and `{{...}}` placeholders
//!
//! Blank lines are dropped; any other line is copied through unchanged.

mod inline;
mod palette;

pub use palette::Palette;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Title,
    Description,
    Note,
    Example,
    Blank,
    PassThrough,
}

impl LineKind {
    fn classify(line: &str) -> Self {
        match line.as_bytes().first() {
            Some(b'#') => LineKind::Title,
            Some(b'>') => LineKind::Description,
            Some(b'-') => LineKind::Note,
            Some(b'`') => LineKind::Example,
            None => LineKind::Blank,
            Some(_) => LineKind::PassThrough,
        }
    }
}

/// Render page markup into terminal text.
///
/// Fails with [`Error::MalformedMarkup`] when the page is not UTF-8, when a
/// line has no terminating newline, or when an example has no closing
/// backtick. Nothing is returned for a page that fails part way.
pub fn render(markup: &[u8], palette: &Palette) -> Result<String, Error> {
    let source = std::str::from_utf8(markup).map_err(|e| Error::MalformedMarkup {
        line: line_number(markup, e.valid_up_to()),
        reason: "page is not valid UTF-8",
    })?;

    let mut out = String::new();
    let mut cursor = 0;
    let mut line_no = 0;

    while cursor < source.len() {
        line_no += 1;
        let newline = source[cursor..]
            .find('\n')
            .map(|offset| cursor + offset)
            .ok_or(Error::MalformedMarkup {
                line: line_no,
                reason: "line is missing its trailing newline",
            })?;
        let line = strip_cr(&source[cursor..newline]);

        match LineKind::classify(line) {
            LineKind::Title => title(&mut out, line, palette),
            LineKind::Description => {
                inline::description(&mut out, marker_text(line), palette);
                if note_follows(&source[newline + 1..]) {
                    out.push_str("\n\n");
                } else {
                    out.push('\n');
                }
            }
            LineKind::Note => inline::note(&mut out, marker_text(line), palette),
            LineKind::Example => inline::example(&mut out, line, palette)
                .map_err(|reason| Error::MalformedMarkup { line: line_no, reason })?,
            LineKind::Blank => {}
            LineKind::PassThrough => {
                out.push_str(line);
                out.push('\n');
            }
        }

        cursor = newline + 1;
    }

    Ok(out)
}

fn title(out: &mut String, line: &str, palette: &Palette) {
    let text = line.trim_start_matches('#').trim();
    out.push_str(palette.heading);
    out.push_str(text);
    out.push('\n');
    out.extend(std::iter::repeat('-').take(text.chars().count()));
    out.push_str(palette.heading_end);
}

/// Line text after its one-character marker and an optional space.
fn marker_text(line: &str) -> &str {
    let rest = &line[1..];
    rest.strip_prefix(' ').unwrap_or(rest)
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// True when `rest` opens with a blank line followed by a note line, i.e. the
/// description paragraph is the last one before the notes.
fn note_follows(rest: &str) -> bool {
    let Some((next, after)) = rest.split_once('\n') else {
        return false;
    };
    strip_cr(next).is_empty() && after.starts_with('-')
}

/// 1-based line holding byte `offset`.
fn line_number(markup: &[u8], offset: usize) -> usize {
    markup[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

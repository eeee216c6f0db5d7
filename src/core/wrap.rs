//! Word wrapping
//!
//! Text is split on explicit newlines first; each segment then maps to one
//! or more display lines. Inside a segment the packing unit is a word plus
//! the separator that immediately follows it, and units are never split:
//! a unit longer than the width gets a line of its own.
//!
//! A unit's trailing space is not measured when testing whether it fits, so
//! a packed line may overhang the width by that one space. The overhang never
//! reaches the output: a soft break consumes one trailing space from the line
//! it closes, and the last line of a segment drops it when it would not fit.
//! Other separators (`,` `-` `;` `:`) stay on the line and count towards its
//! width.

/// Characters a segment may break after
pub const SEPARATORS: [char; 5] = [' ', ',', '-', ';', ':'];

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// A token of a single line segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A maximal run of non-separator characters
    Word(&'a str),
    /// One separator character
    Separator(char),
}

/// Split a segment into word and separator tokens
pub fn tokenize(segment: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, c) in segment.char_indices() {
        if is_separator(c) {
            if start < i {
                tokens.push(Token::Word(&segment[start..i]));
            }
            tokens.push(Token::Separator(c));
            start = i + c.len_utf8();
        }
    }
    if start < segment.len() {
        tokens.push(Token::Word(&segment[start..]));
    }

    tokens
}

/// Group tokens into packing units, each closed by a separator
fn units(segment: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;
    let mut end = 0;

    for token in tokenize(segment) {
        match token {
            Token::Word(word) => end += word.len(),
            Token::Separator(c) => {
                end += c.len_utf8();
                units.push(&segment[start..end]);
                start = end;
            }
        }
    }
    if start < end {
        units.push(&segment[start..end]);
    }

    units
}

/// Wrap `text` to `width` columns.
///
/// Always returns at least one line; consecutive newlines yield empty lines.
pub fn split(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, width, &mut lines);
    }
    lines
}

fn wrap_segment(segment: &str, width: usize, lines: &mut Vec<String>) {
    if char_len(segment) < width {
        lines.push(segment.to_string());
        return;
    }

    let mut current = String::new();
    let mut current_len = 0;

    for unit in units(segment) {
        let unit_len = char_len(unit);
        let measured = if unit.ends_with(' ') {
            unit_len - 1
        } else {
            unit_len
        };

        if current_len > 0 && current_len + measured > width {
            if current.ends_with(' ') {
                current.pop();
            }
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        current.push_str(unit);
        current_len += unit_len;
    }

    if current_len > width && current.ends_with(' ') {
        current.pop();
    }
    lines.push(current);
}

/// Width and height, in cells, of a set of wrapped lines
pub fn extent(lines: &[String]) -> (usize, usize) {
    let width = lines.iter().map(|l| char_len(l)).max().unwrap_or(0);
    (width, lines.len())
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The first `n` characters of `text`
pub(crate) fn truncate_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

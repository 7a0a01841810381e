#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Number of columns a tab character advances the cursor by.
pub const TAB_WIDTH: usize = 4;

/// A single 1-based source coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Loc {
    pub line: usize,
    pub column: usize,
}

impl Loc {
    pub fn new(line: usize, column: usize) -> Self {
        Loc { line, column }
    }

    /// The first column of the first line.
    pub fn origin() -> Self {
        Loc { line: 1, column: 1 }
    }

    pub fn add_column(&self, n: usize) -> Self {
        Loc {
            line: self.line,
            column: self.column + n,
        }
    }

    pub fn add_line(&self, n: usize) -> Self {
        Loc {
            line: self.line + n,
            column: self.column,
        }
    }

    pub fn add_loc(&self, other: Loc) -> Self {
        Loc {
            line: self.line + other.line,
            column: self.column + other.column,
        }
    }

    /// The location reached after reading `c` at this location.
    ///
    /// A newline starts the next line, a tab advances [`TAB_WIDTH`] columns
    /// and a carriage return occupies no columns.
    pub fn step(&self, c: char) -> Self {
        match c {
            '\n' => Loc::new(self.line + 1, 1),
            '\t' => self.add_column(TAB_WIDTH),
            '\r' => *self,
            _ => self.add_column(1),
        }
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A source range. `end` points just past the last character covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Loc,
    pub end: Loc,
}

impl Span {
    pub fn new(start: Loc, end: Loc) -> Self {
        Span { start, end }
    }

    /// A zero-width span sitting at `loc`.
    pub fn point(loc: Loc) -> Self {
        Span {
            start: loc,
            end: loc,
        }
    }

    /// Returns the slice of `source` covered by this span, or `None` if the
    /// span does not fall on character boundaries of `source`.
    ///
    /// Columns are counted the same way the lexer counts them, so a tab
    /// occupies [`TAB_WIDTH`] columns.
    pub fn source_text<'a>(&self, source: &'a str) -> Option<&'a str> {
        let start = byte_offset(source, self.start)?;
        let end = byte_offset(source, self.end)?;

        if start > end {
            return None;
        }

        Some(&source[start..end])
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn byte_offset(source: &str, target: Loc) -> Option<usize> {
    let mut loc = Loc::origin();

    for (offset, c) in source.char_indices() {
        if loc == target {
            return Some(offset);
        }
        if loc > target {
            return None;
        }

        loc = loc.step(c);
    }

    if loc == target {
        Some(source.len())
    } else {
        None
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line break.
pub fn get_source_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::{get_source_line, Loc, Span};

    #[test]
    fn test_loc_arithmetic_is_pure() {
        let loc = Loc::new(3, 7);

        assert_eq!(loc.add_column(2), Loc::new(3, 9));
        assert_eq!(loc.add_line(1), Loc::new(4, 7));
        assert_eq!(loc.add_loc(Loc::new(1, 1)), Loc::new(4, 8));
        assert_eq!(loc, Loc::new(3, 7));
    }

    #[test]
    fn test_loc_ordering_is_lexicographic() {
        assert!(Loc::new(1, 20) < Loc::new(2, 1));
        assert!(Loc::new(2, 1) < Loc::new(2, 2));
    }

    #[test]
    fn test_render_positions() {
        let span = Span::new(Loc::new(1, 1), Loc::new(2, 4));
        assert_eq!(Loc::new(12, 5).to_string(), "12:5");
        assert_eq!(span.to_string(), "1:1-2:4");
    }

    #[test]
    fn test_span_source_text() {
        let source = "type A = B;\n\tenum E { X }";

        let first = Span::new(Loc::new(1, 6), Loc::new(1, 7));
        assert_eq!(first.source_text(source), Some("A"));

        // Tab advances four columns, so `enum` starts at column 5.
        let second = Span::new(Loc::new(2, 5), Loc::new(2, 9));
        assert_eq!(second.source_text(source), Some("enum"));

        let whole = Span::new(Loc::new(1, 1), Loc::new(2, 17));
        assert_eq!(whole.source_text(source), Some(source));

        let inside_tab = Span::new(Loc::new(2, 3), Loc::new(2, 9));
        assert_eq!(inside_tab.source_text(source), None);
    }

    #[test]
    fn test_get_source_line() {
        let source = "first\r\nsecond\nthird";
        assert_eq!(get_source_line(source, 1), Some("first"));
        assert_eq!(get_source_line(source, 2), Some("second"));
        assert_eq!(get_source_line(source, 3), Some("third"));
        assert_eq!(get_source_line(source, 4), None);
        assert_eq!(get_source_line(source, 0), None);
    }
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        error: message
        -> types.qn
           |
        20 | record { x: i32 }
           | -------^
    */

    let span = error.get_span();
    let line = span.start.line;
    let line_text = get_source_line(source, line).unwrap_or("");

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}:{}", file, span.start);
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_columns) = remove_starting_whitespace(line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = span.start.column.saturating_sub(removed_columns).max(1);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

/// Strips leading blanks, returning the rest of the line and the number of
/// columns the stripped blanks occupied.
fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut columns = 0;
    let mut start = 0;
    for (offset, c) in string.char_indices() {
        match c {
            ' ' => columns += 1,
            '\t' => columns += TAB_WIDTH,
            _ => {
                start = offset;
                break;
            }
        }
        start = offset + c.len_utf8();
    }

    (&string[start..], columns)
}

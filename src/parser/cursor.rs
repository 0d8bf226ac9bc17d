//! Character cursor for bounded navigation over the markup input
//!
//! A cursor always holds the complete input and a `[pos, end)` window into
//! it, so offsets stay absolute across recursive scans and errors can be
//! reported against the original text.

use crate::error::{Location, ParseError};

#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over the whole input
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            end: input.len(),
        }
    }

    /// Create a cursor restricted to `start..end` of the input.
    ///
    /// Bounds are clamped to the input length; callers pass offsets of ASCII
    /// delimiters, which are always char boundaries.
    pub fn with_bounds(input: &'a str, start: usize, end: usize) -> Self {
        let end = end.min(input.len());
        Self {
            input,
            pos: start.min(end),
            end,
        }
    }

    /// Get current character without consuming
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance cursor by one character
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Move to the next occurrence of `target`, or to the end of the window.
    /// Returns whether `target` was found.
    pub fn skip_until(&mut self, target: char) -> bool {
        match self.remaining().find(target) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.end;
                false
            }
        }
    }

    /// Move to an absolute offset inside the window
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.end);
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Text between the cursor and the end of its window
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..self.end).unwrap_or_default()
    }

    /// Text between `start` and the current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Line and column of an absolute offset in the full input
    pub fn location_at(&self, offset: usize) -> Location {
        let before = self.input.get(..offset).unwrap_or(self.input);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let column = before.get(line_start..).map_or(0, |s| s.chars().count()) + 1;
        Location::new(line, column)
    }

    /// Attach the location of `offset` to an error
    pub fn error_at(&self, offset: usize, err: impl Into<ParseError>) -> ParseError {
        err.into().with_location(self.location_at(offset))
    }

    pub fn error_here(&self, err: impl Into<ParseError>) -> ParseError {
        self.error_at(self.pos, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_basic() {
        let mut cursor = Cursor::new("héllo");
        assert_eq!(cursor.current(), Some('h'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('é'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('l'));
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut cursor = Cursor::with_bounds("<a>text</a>", 3, 7);
        assert_eq!(cursor.remaining(), "text");
        assert!(!cursor.skip_until('<'));
        assert!(cursor.is_eof());
        assert_eq!(cursor.slice_from(3), "text");
    }

    #[test]
    fn test_cursor_skip_until() {
        let mut cursor = Cursor::new("abc<def");
        assert!(cursor.skip_until('<'));
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.current(), Some('<'));
    }

    #[test]
    fn test_cursor_whitespace() {
        let mut cursor = Cursor::new("  \t\nhello");
        cursor.skip_whitespace();
        assert_eq!(cursor.current(), Some('h'));
    }

    #[test]
    fn test_location_at() {
        let cursor = Cursor::new("<speak>\n  <p>\n</speak>");
        assert_eq!(cursor.location_at(0), Location::new(1, 1));
        assert_eq!(cursor.location_at(10), Location::new(2, 3));
        assert_eq!(cursor.location_at(14), Location::new(3, 1));
    }
}

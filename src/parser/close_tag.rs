//! Locating the closing tag that matches an opening tag.
//!
//! Tags opened after the starting tag are tracked on a stack, so a nested
//! element with the same name (`<p><p></p></p>`) is skipped over instead of
//! ending the search early.

use super::cursor::Cursor;
use super::tag::{self, CloseTag, TagToken};
use crate::error::{Result, TagError};

/// Byte range of a matching closing tag, `start` at its `<`, `end` past `>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTagSpan {
    pub start: usize,
    pub end: usize,
}

/// Find the closing tag for `name` in the cursor's window, which starts just
/// after the opening tag.
///
/// Returns `Ok(None)` when the window ends before a matching close tag. A
/// closing tag that belongs to no open tag inside the window is an error.
pub fn find_close_tag(mut cursor: Cursor<'_>, name: &str) -> Result<Option<CloseTagSpan>> {
    let mut open: Vec<&str> = Vec::new();

    while cursor.skip_until('<') {
        match tag::read_tag(&mut cursor)? {
            TagToken::Open(tag) => open.push(tag.name),
            TagToken::Close(close) => {
                if let Some(span) = match_close(&cursor, &mut open, name, &close)? {
                    return Ok(Some(span));
                }
            }
        }
    }

    Ok(None)
}

fn match_close<'a>(
    cursor: &Cursor<'a>,
    open: &mut Vec<&'a str>,
    name: &str,
    close: &CloseTag<'a>,
) -> Result<Option<CloseTagSpan>> {
    match open.last().copied() {
        None if close.name == name => Ok(Some(CloseTagSpan {
            start: close.start,
            end: close.end,
        })),
        Some(top) if top == close.name => {
            open.pop();
            Ok(None)
        }
        // An outer tag is being closed while `top` is still open
        Some(top) if close.name == name || open.contains(&close.name) => Err(
            cursor.error_at(close.start, TagError::UnmatchedTag(top.to_string())),
        ),
        top => Err(cursor.error_at(
            close.start,
            TagError::MismatchedCloseTag {
                expected: top.unwrap_or(name).to_string(),
                found: close.name.to_string(),
            },
        )),
    }
}

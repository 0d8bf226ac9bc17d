//! Reading of individual `<...>` tags.
//!
//! Both the scanner and the close-tag locator go through [`read_tag`], so an
//! opening or closing tag is recognized the same way wherever it appears.

use super::cursor::Cursor;
use crate::error::{Result, TagError};

/// An opening tag `<name attributes>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag<'a> {
    pub name: &'a str,
    /// Trimmed text between the name and `>`
    pub raw_attributes: &'a str,
    /// Absolute offset of `raw_attributes` in the input
    pub attributes_offset: usize,
    /// Offset just past `>`
    pub end: usize,
}

/// A closing tag `</name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseTag<'a> {
    pub name: &'a str,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagToken<'a> {
    Open(OpenTag<'a>),
    Close(CloseTag<'a>),
}

/// Whether the `<` under the cursor begins a closing tag. Whitespace between
/// `<` and `/` is allowed.
pub fn is_closing(cursor: &Cursor<'_>) -> bool {
    let mut probe = cursor.clone();
    probe.advance();
    probe.skip_whitespace();
    probe.current() == Some('/')
}

/// Read the tag starting at the `<` under the cursor and leave the cursor
/// just past its `>`.
pub fn read_tag<'a>(cursor: &mut Cursor<'a>) -> Result<TagToken<'a>> {
    let start = cursor.pos();
    let closing = is_closing(cursor);

    cursor.advance(); // consume '<'
    cursor.skip_whitespace();
    if closing {
        cursor.advance(); // consume '/'
    }

    let body_start = cursor.pos();
    let body = read_tag_body(cursor, start)?;
    let end = cursor.pos();

    if closing {
        let name = body.trim();
        validate_name(cursor, start, name)?;
        return Ok(TagToken::Close(CloseTag { name, start, end }));
    }

    let trimmed = body.trim_start();
    let leading = body.len() - trimmed.len();
    let name_len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let (name, rest) = trimmed.split_at(name_len);
    validate_name(cursor, start, name)?;

    let raw_attributes = rest.trim();
    let rest_leading = rest.len() - rest.trim_start().len();

    Ok(TagToken::Open(OpenTag {
        name,
        raw_attributes,
        attributes_offset: body_start + leading + name_len + rest_leading,
        end,
    }))
}

/// Consume everything up to and including `>`, returning the text before it.
fn read_tag_body<'a>(cursor: &mut Cursor<'a>, tag_start: usize) -> Result<&'a str> {
    let body_start = cursor.pos();
    while let Some(c) = cursor.current() {
        match c {
            '>' => {
                let body = cursor.slice_from(body_start);
                cursor.advance();
                return Ok(body);
            }
            '<' => break,
            _ => cursor.advance(),
        }
    }
    Err(cursor.error_at(tag_start, TagError::UnterminatedTag))
}

fn validate_name(cursor: &Cursor<'_>, tag_start: usize, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(cursor.error_at(tag_start, TagError::UnnamedTag));
    }
    if name.contains(['/', '<', '>']) || name.contains(char::is_whitespace) {
        return Err(cursor.error_at(tag_start, TagError::InvalidTagName(name.to_string())));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    fn read(input: &str) -> Result<TagToken<'_>> {
        read_tag(&mut Cursor::new(input))
    }

    fn tag_error(input: &str) -> Option<TagError> {
        match read(input) {
            Err(e) => match e.kind() {
                ParseErrorKind::Tag(err) => Some(err.clone()),
                _ => None,
            },
            Ok(_) => None,
        }
    }

    #[test]
    fn test_name_followed_by_gt() {
        let mut cursor = Cursor::new("<speak>rest");
        let token = read_tag(&mut cursor);
        assert_eq!(
            token.ok(),
            Some(TagToken::Open(OpenTag {
                name: "speak",
                raw_attributes: "",
                attributes_offset: 6,
                end: 7,
            }))
        );
        assert_eq!(cursor.remaining(), "rest");
    }

    #[test]
    fn test_name_with_attributes_and_whitespace() {
        let input = "<  prosody   rate=\"slow\"  >";
        match read(input) {
            Ok(TagToken::Open(open)) => {
                assert_eq!(open.name, "prosody");
                assert_eq!(open.raw_attributes, "rate=\"slow\"");
                assert_eq!(
                    input.get(open.attributes_offset..open.attributes_offset + 11),
                    Some("rate=\"slow\"")
                );
                assert_eq!(open.end, input.len());
            }
            other => panic!("expected open tag, got {:?}", other),
        }
    }

    #[test]
    fn test_closing_tag_with_whitespace() {
        match read("<  /  p >") {
            Ok(TagToken::Close(close)) => {
                assert_eq!(close.name, "p");
                assert_eq!(close.start, 0);
                assert_eq!(close.end, 9);
            }
            other => panic!("expected close tag, got {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_tag() {
        assert_eq!(tag_error("<speak"), Some(TagError::UnterminatedTag));
        assert_eq!(tag_error("<speak <p>"), Some(TagError::UnterminatedTag));
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(tag_error("<>"), Some(TagError::UnnamedTag));
        assert_eq!(tag_error("<   >"), Some(TagError::UnnamedTag));
        assert_eq!(tag_error("</>"), Some(TagError::UnnamedTag));
        assert_eq!(
            tag_error("<br/>"),
            Some(TagError::InvalidTagName("br/".to_string()))
        );
    }
}

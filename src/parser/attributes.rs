//! Attribute list parsing.
//!
//! Grammar, per attribute: `key = "value"`, whitespace allowed around `=`.
//! Values must be double-quoted and attributes are separated by whitespace.

use super::cursor::Cursor;
use super::node::Attribute;
use crate::error::{AttributeError, Result};
use tracing::trace;

/// Parse the attributes in the cursor's window.
///
/// The window is the raw text between a tag's name and its `>`.
pub fn parse_attributes(mut cursor: Cursor<'_>) -> Result<Vec<Attribute>> {
    let mut attributes = Vec::new();

    loop {
        cursor.skip_whitespace();
        if cursor.is_eof() {
            break;
        }

        let attribute = parse_attribute(&mut cursor)?;

        // The next attribute, if any, must be separated by whitespace
        if cursor.current().is_some_and(|c| !c.is_whitespace()) {
            return Err(cursor.error_here(AttributeError::InvalidAttributeSyntax(
                attribute.name,
            )));
        }

        trace!(name = %attribute.name, value = %attribute.value, "parsed attribute");
        attributes.push(attribute);
    }

    Ok(attributes)
}

fn parse_attribute(cursor: &mut Cursor<'_>) -> Result<Attribute> {
    let key_start = cursor.pos();
    let found_equals = cursor.skip_until('=');
    let key = cursor.slice_from(key_start).trim();

    if key.is_empty() {
        return Err(cursor.error_at(key_start, AttributeError::EmptyAttributeKey));
    }
    if !found_equals || key.contains(|c: char| c.is_whitespace() || c == '"' || c == '\'') {
        return Err(cursor.error_at(
            key_start,
            AttributeError::InvalidAttributeSyntax(key.to_string()),
        ));
    }

    cursor.advance(); // consume '='
    cursor.skip_whitespace();

    if cursor.current() != Some('"') {
        return Err(cursor.error_here(AttributeError::InvalidAttributeSyntax(key.to_string())));
    }
    cursor.advance(); // consume opening quote

    let value_start = cursor.pos();
    if !cursor.skip_until('"') {
        return Err(cursor.error_at(
            value_start,
            AttributeError::UnterminatedAttributeValue(key.to_string()),
        ));
    }
    let value = cursor.slice_from(value_start).trim();
    cursor.advance(); // consume closing quote

    Ok(Attribute::new(key, value))
}

//! Recursive tag scanner.
//!
//! Splits a window of the input into sibling nodes. For every opening tag it
//! parses the attributes, locates the matching close tag and scans the
//! content in between recursively.

use super::attributes::parse_attributes;
use super::close_tag::find_close_tag;
use super::config::{ParserConfig, ParsingContext};
use super::cursor::Cursor;
use super::entity::unescape;
use super::node::{Element, Node};
use super::tag::{self, TagToken};
use crate::error::{Result, TagError};
use tracing::{debug, trace};

pub struct Scanner<'a, 'c> {
    input: &'a str,
    config: &'c ParserConfig,
    context: ParsingContext,
}

impl<'a, 'c> Scanner<'a, 'c> {
    pub fn new(input: &'a str, config: &'c ParserConfig) -> Self {
        Self {
            input,
            config,
            context: ParsingContext::new(),
        }
    }

    /// Scan the whole input into top-level nodes
    pub fn scan(&mut self) -> Result<Vec<Node>> {
        self.scan_nodes(Cursor::new(self.input))
    }

    fn scan_nodes(&mut self, mut cursor: Cursor<'a>) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();

        while let Some(c) = cursor.current() {
            if c == '<' {
                let element = self.scan_element(&mut cursor)?;
                nodes.push(Node::Element(element));
            } else {
                let start = cursor.pos();
                cursor.skip_until('<');
                let text = unescape(cursor.slice_from(start));
                if !text.is_empty() {
                    trace!(len = text.len(), "text node");
                    nodes.push(Node::Text(text));
                }
            }
        }

        Ok(nodes)
    }

    fn scan_element(&mut self, cursor: &mut Cursor<'a>) -> Result<Element> {
        let tag_start = cursor.pos();
        if tag::is_closing(cursor) {
            return Err(cursor.error_here(TagError::UnexpectedClosingTag));
        }

        let open = match tag::read_tag(cursor)? {
            TagToken::Open(open) => open,
            TagToken::Close(_) => {
                return Err(cursor.error_at(tag_start, TagError::UnexpectedClosingTag));
            }
        };
        debug!(name = open.name, depth = self.context.depth(), "opening tag");

        let attributes = if open.raw_attributes.is_empty() {
            Vec::new()
        } else {
            let start = open.attributes_offset;
            parse_attributes(Cursor::with_bounds(
                self.input,
                start,
                start + open.raw_attributes.len(),
            ))?
        };

        let content = Cursor::with_bounds(self.input, open.end, cursor.end());
        let close = find_close_tag(content, open.name)?.ok_or_else(|| {
            cursor.error_at(tag_start, TagError::UnmatchedTag(open.name.to_string()))
        })?;

        self.context
            .enter_nested(self.config)
            .map_err(|e| e.with_location(cursor.location_at(tag_start)))?;
        let children =
            self.scan_nodes(Cursor::with_bounds(self.input, open.end, close.start))?;
        self.context.exit_nested();

        cursor.seek(close.end);

        Ok(Element {
            name: open.name.to_string(),
            attributes,
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::node::Attribute;

    fn scan(input: &str) -> Result<Vec<Node>> {
        let config = ParserConfig::default();
        Scanner::new(input, &config).scan()
    }

    #[test]
    fn test_text_only() {
        assert_eq!(
            scan("Hello &amp; bye").ok(),
            Some(vec![Node::text("Hello & bye")])
        );
    }

    #[test]
    fn test_siblings_and_nesting() {
        let nodes = scan("a<p x=\"1\">b<s>c</s></p>d<q></q>").ok();
        let expected = vec![
            Node::text("a"),
            Node::Element(Element {
                name: "p".to_string(),
                attributes: vec![Attribute::new("x", "1")],
                children: vec![
                    Node::text("b"),
                    Element::new("s").with_text("c").into(),
                ],
            }),
            Node::text("d"),
            Element::new("q").into(),
        ];
        assert_eq!(nodes, Some(expected));
    }

    #[test]
    fn test_adjacent_tags_produce_no_empty_text() {
        assert_eq!(
            scan("<a></a><b></b>").ok(),
            Some(vec![Element::new("a").into(), Element::new("b").into()])
        );
    }

    #[test]
    fn test_same_name_nesting() {
        assert_eq!(
            scan("<p><p>x</p></p>").ok(),
            Some(vec![Element::new("p")
                .with_child(Element::new("p").with_text("x"))
                .into()])
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scan("").ok(), Some(Vec::new()));
    }
}

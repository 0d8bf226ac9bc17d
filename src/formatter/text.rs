//! Flattening of a tree to its plain text.

use super::{FormatConfig, Formatter};
use crate::parser::{Document, Node};

/// Concatenate the text of `node` and all its descendants in document order.
///
/// Element names and attributes contribute nothing, so an element without
/// text descendants flattens to an empty string.
pub fn flatten(node: &Node) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            for child in &element.children {
                collect_text(child, out);
            }
        }
    }
}

/// Renders a document as the plain text it speaks
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, document: &Document, _config: &FormatConfig) -> String {
        document.text()
    }
}

use super::{CommonFormatter, FormatConfig, Formatter};
use crate::parser::entity::escape;
use crate::parser::{Document, Element, Node};

/// Serializes a tree back to SSML markup.
///
/// Compact output re-parses to the same tree. Pretty output only breaks lines
/// inside elements whose children are all elements, so text content is never
/// altered, but the added whitespace does appear as text on re-parse.
pub struct SsmlFormatter;

impl CommonFormatter for SsmlFormatter {}

impl Formatter for SsmlFormatter {
    fn format(&self, document: &Document, config: &FormatConfig) -> String {
        let mut out = String::new();
        Self::format_element(document.root(), 0, config, &mut out);
        out
    }
}

impl SsmlFormatter {
    fn format_element(element: &Element, indent: usize, config: &FormatConfig, out: &mut String) {
        out.push('<');
        out.push_str(&element.name);
        for attr in &element.attributes {
            out.push(' ');
            out.push_str(&attr.to_string());
        }
        out.push('>');

        let block = config.pretty
            && !element.children.is_empty()
            && element.children.iter().all(|c| matches!(c, Node::Element(_)));

        if block {
            let (indent_str, inner_indent) = Self::create_indentation(indent, config);
            for child in &element.children {
                out.push('\n');
                out.push_str(&inner_indent);
                Self::format_node(child, indent + 1, config, out);
            }
            out.push('\n');
            out.push_str(&indent_str);
        } else {
            // Mixed content stays on one line all the way down
            let inline = FormatConfig {
                pretty: false,
                ..config.clone()
            };
            for child in &element.children {
                Self::format_node(child, indent, &inline, out);
            }
        }

        out.push_str("</");
        out.push_str(&element.name);
        out.push('>');
    }

    fn format_node(node: &Node, indent: usize, config: &FormatConfig, out: &mut String) {
        match node {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Element(element) => Self::format_element(element, indent, config, out),
        }
    }
}

use super::formatter_common::helpers::{quote_json, wrap_items};
use super::{CommonFormatter, FormatConfig, Formatter};
use crate::parser::{Attribute, Document, Element, Node};

/// Renders the tree as JSON: elements become
/// `{"name", "attributes", "children"}` objects and text becomes strings.
pub struct JsonFormatter;

impl CommonFormatter for JsonFormatter {}

impl Formatter for JsonFormatter {
    fn format(&self, document: &Document, config: &FormatConfig) -> String {
        Self::format_element(document.root(), 0, config)
    }
}

impl JsonFormatter {
    fn format_element(element: &Element, indent: usize, config: &FormatConfig) -> String {
        let fields = vec![
            Self::field("name", quote_json(&element.name), config),
            Self::field(
                "attributes",
                Self::format_attributes(&element.attributes, indent + 1, config),
                config,
            ),
            Self::field(
                "children",
                Self::format_children(&element.children, indent + 1, config),
                config,
            ),
        ];
        wrap_items(
            '{',
            '}',
            fields,
            Self::create_indentation(indent, config),
            config,
        )
    }

    fn format_attributes(attributes: &[Attribute], indent: usize, config: &FormatConfig) -> String {
        let items = attributes
            .iter()
            .map(|attr| {
                format!(
                    "{{{}{}{}}}",
                    Self::field("name", quote_json(&attr.name), config),
                    if config.pretty { ", " } else { "," },
                    Self::field("value", quote_json(&attr.value), config)
                )
            })
            .collect();
        wrap_items(
            '[',
            ']',
            items,
            Self::create_indentation(indent, config),
            config,
        )
    }

    fn format_children(children: &[Node], indent: usize, config: &FormatConfig) -> String {
        let items = children
            .iter()
            .map(|child| match child {
                Node::Text(text) => quote_json(text),
                Node::Element(element) => Self::format_element(element, indent + 1, config),
            })
            .collect();
        wrap_items(
            '[',
            ']',
            items,
            Self::create_indentation(indent, config),
            config,
        )
    }

    fn field(key: &str, value: String, config: &FormatConfig) -> String {
        let separator = if config.pretty { ": " } else { ":" };
        format!("\"{}\"{}{}", key, separator, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SsmlParser;

    fn format(input: &str, config: &FormatConfig) -> Option<String> {
        let document = SsmlParser::new(input).and_then(|p| p.parse()).ok()?;
        Some(JsonFormatter.format(&document, config))
    }

    #[test]
    fn test_compact_json() {
        let output = format(
            "<speak rate=\"slow\">Say \"hi\"<break></break></speak>",
            &FormatConfig::compact(),
        );
        assert_eq!(
            output.as_deref(),
            Some(concat!(
                r#"{"name":"speak","attributes":[{"name":"rate","value":"slow"}],"#,
                r#""children":["Say \"hi\"",{"name":"break","attributes":[],"children":[]}]}"#
            ))
        );
    }

    #[test]
    fn test_pretty_json() {
        let output = format("<speak>a</speak>", &FormatConfig::default());
        assert_eq!(
            output.as_deref(),
            Some("{\n  \"name\": \"speak\",\n  \"attributes\": [],\n  \"children\": [\n    \"a\"\n  ]\n}")
        );
    }
}

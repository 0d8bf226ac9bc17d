use super::FormatConfig;

/// Common formatting functionality shared between the structured formatters
pub trait CommonFormatter {
    /// Creates indentation strings for the current level and the one below it
    fn create_indentation(indent: usize, config: &FormatConfig) -> (String, String) {
        if !config.pretty {
            return (String::new(), String::new());
        }
        let indent_str = " ".repeat(indent * config.indent_spaces);
        let inner_indent = " ".repeat((indent + 1) * config.indent_spaces);
        (indent_str, inner_indent)
    }
}

/// Helper functions for formatting collections
pub mod helpers {
    use super::FormatConfig;

    /// Wraps already formatted items in `open`/`close`, one per line when
    /// pretty printing
    pub fn wrap_items(
        open: char,
        close: char,
        items: Vec<String>,
        (indent_str, inner_indent): (String, String),
        config: &FormatConfig,
    ) -> String {
        if items.is_empty() {
            return format!("{}{}", open, close);
        }
        if !config.pretty {
            return format!("{}{}{}", open, items.join(","), close);
        }

        let items: Vec<String> = items
            .into_iter()
            .map(|item| format!("{}{}", inner_indent, item))
            .collect();
        format!("{}\n{}\n{}{}", open, items.join(",\n"), indent_str, close)
    }

    /// Quotes a string as a JSON string literal
    pub fn quote_json(s: &str) -> String {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('"');
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }
}

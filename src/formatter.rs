mod formatter_common;
mod json;
mod ssml;
pub mod text;

pub use self::{
    formatter_common::CommonFormatter, json::JsonFormatter, ssml::SsmlFormatter,
    text::TextFormatter,
};
use crate::parser::Document;

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for indentation
    pub indent_spaces: usize,
    /// Whether to break nested structures over several lines
    pub pretty: bool,
}

/// Default configuration for formatting
impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            pretty: true,
        }
    }
}

impl FormatConfig {
    /// Single-line output with no added whitespace
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }
}

/// Trait for rendering a parsed document as a string
pub trait Formatter {
    fn format(&self, document: &Document, config: &FormatConfig) -> String;
}

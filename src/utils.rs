use crate::{
    error::{IOError, ParseError, Result},
    formatter::{FormatConfig, Formatter, JsonFormatter, SsmlFormatter, TextFormatter},
    parser::{Document, SsmlParser},
};
use std::fs;

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            ParseError::from(IOError::FileNotFound(path.to_string())).with_source(e)
        }
        std::io::ErrorKind::PermissionDenied => {
            ParseError::from(IOError::PermissionDenied(path.to_string())).with_source(e)
        }
        _ => ParseError::from(IOError::ReadError(e.to_string())).with_source(e),
    })
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => {
            ParseError::from(IOError::PermissionDenied(path.to_string())).with_source(e)
        }
        _ => ParseError::from(IOError::WriteError(e.to_string())).with_source(e),
    })
}

pub fn parse_ssml(content: &str) -> Result<Document> {
    let parser = SsmlParser::new(content)?;
    parser.parse()
}

pub fn format_text(document: &Document) -> String {
    TextFormatter.format(document, &FormatConfig::default())
}

pub fn format_ssml(document: &Document) -> String {
    SsmlFormatter.format(document, &FormatConfig::default())
}

pub fn format_json(document: &Document) -> String {
    JsonFormatter.format(document, &FormatConfig::default())
}

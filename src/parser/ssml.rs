// parser/ssml.rs
//! SSML document parser.
//!
//! Scans the input into top-level nodes and validates that they form a single
//! `<speak>` document:
//! - Whitespace-only text around the root is ignored
//! - Any other top-level sibling is rejected
//! - The sole top-level node must be a `speak` element

use super::config::ParserConfig;
use super::node::{Document, Node, ROOT_TAG};
use super::scanner::Scanner;
use crate::error::{DocumentError, ParseError, Result};
use tracing::{debug, instrument};

/// Parser for SSML documents
#[derive(Debug)]
pub struct SsmlParser<'a> {
    input: &'a str,
    config: ParserConfig,
}

impl<'a> SsmlParser<'a> {
    /// Creates a new parser with default limits
    pub fn new(input: &'a str) -> Result<Self> {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a new parser with custom limits
    pub fn with_config(input: &'a str, config: ParserConfig) -> Result<Self> {
        config.validate_input_size(input.len())?;
        Ok(Self { input, config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a complete SSML document
    /// # Returns
    /// - Ok(Document) with the `<speak>` root and its subtree
    /// - Err if the input is malformed or not a single `<speak>` element
    #[instrument(level = "debug", skip(self), fields(len = self.input.len()))]
    pub fn parse(&self) -> Result<Document> {
        let nodes = Scanner::new(self.input, &self.config).scan()?;
        debug!(count = nodes.len(), "scanned top-level nodes");
        into_document(nodes)
    }
}

/// Unwrap the single top-level `<speak>` element
fn into_document(nodes: Vec<Node>) -> Result<Document> {
    let mut top_level = nodes
        .into_iter()
        .filter(|node| !matches!(node, Node::Text(text) if text.trim().is_empty()));

    let first = top_level.next();
    if top_level.next().is_some() {
        return Err(ParseError::from(DocumentError::MultipleTopLevel));
    }

    match first {
        Some(Node::Element(root)) if root.name == ROOT_TAG => Ok(Document::from_root(root)),
        Some(Node::Element(other)) => Err(ParseError::from(DocumentError::MissingRoot)
            .with_context(format!("found <{}> at the top level", other.name))),
        Some(Node::Text(_)) => Err(ParseError::from(DocumentError::MissingRoot)
            .with_context("top-level text is not allowed")),
        None => Err(ParseError::from(DocumentError::MissingRoot)),
    }
}

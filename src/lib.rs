//! ssmlparse: a hand-written parser for SSML (Speech Synthesis Markup Language)
//!
//! This crate provides functionality to:
//! - Parse the SSML subset of XML into a typed tree rooted at `<speak>`
//! - Flatten a tree back to the plain text it speaks
//! - Re-serialize a tree as SSML or JSON
//! - Memoize parsed documents in a TTL-bounded LRU cache
//! - Handle errors with a precise kind and location
//!
//! # Examples
//! ```
//! use ssmlparse::{flatten, parse, Result};
//!
//! fn example() -> Result<()> {
//!     let document = parse("<speak>Hello<p> world</p></speak>")?;
//!     assert_eq!(document.text(), "Hello world");
//!     assert_eq!(flatten(&document.children()[1]), " world");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use tracing::{debug, info, instrument};

pub mod cache;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod utils;

// Re-exports
pub use cache::{CacheOptions, DocumentCache, LruCache};
pub use error::{ParseError, ParseErrorKind, Result};
pub use formatter::{text::flatten, FormatConfig, Formatter};
pub use parser::{config::ParserConfig, Attribute, Document, Element, Node, SsmlParser};

/// Parse an SSML document with the default limits
pub fn parse(input: &str) -> Result<Document> {
    SsmlParser::new(input)?.parse()
}

/// Parse an SSML document with custom limits
pub fn parse_with_config(input: &str, config: ParserConfig) -> Result<Document> {
    SsmlParser::with_config(input, config)?.parse()
}

#[instrument]
pub fn parse_file(path: &str) -> Result<Document> {
    debug!("Starting to parse file: {}", path);

    let content = utils::read_file(path)?;

    info!("File read successfully, parsing SSML");
    let result = utils::parse_ssml(&content);

    debug!("Parsing completed");
    result
}

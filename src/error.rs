//! Error handling types for the parser
//!
//! Every failure surfaces as a [`ParseError`] whose [`ParseErrorKind`] names
//! the exact grammar rule that was violated, so callers can match on the kind
//! rather than on a message.

use std::{error::Error, fmt};

/// Main error type for parsing operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Attribute(AttributeError),
    Document(DocumentError),
    IO(IOError),
    Security(SecurityError),
    Tag(TagError),
}

/// Violations of the single-root document shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Top-level content is not a single `speak` element
    MissingRoot,
    /// More than one top-level node, or stray text beside the root
    MultipleTopLevel,
}

/// Tag scanning and matching errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// A tag name containing characters that cannot appear in a name
    InvalidTagName(String),
    /// A closing tag that belongs to no open tag
    MismatchedCloseTag { expected: String, found: String },
    /// A closing tag where an opening tag or text was expected
    UnexpectedClosingTag,
    /// An opening tag with no closing tag
    UnmatchedTag(String),
    /// A tag with an empty name
    UnnamedTag,
    /// An opening tag whose `>` never arrives
    UnterminatedTag,
}

/// Attribute grammar errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    /// `=` with no key before it
    EmptyAttributeKey,
    /// Unquoted, single-quoted or missing attribute value
    InvalidAttributeSyntax(String),
    /// Quoted value missing its closing quote
    UnterminatedAttributeValue(String),
}

/// Security-related errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    /// Exceeded maximum depth of nesting
    MaxDepthExceeded,
    /// Exceeded maximum input size
    MaxSizeExceeded,
}

/// IO operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    /// File not found
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error reading from a file
    ReadError(String),
    /// Error writing to a file
    WriteError(String),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
            context: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<DocumentError> for ParseError {
    fn from(err: DocumentError) -> Self {
        Self::new(ParseErrorKind::Document(err))
    }
}

impl From<TagError> for ParseError {
    fn from(err: TagError) -> Self {
        Self::new(ParseErrorKind::Tag(err))
    }
}

impl From<AttributeError> for ParseError {
    fn from(err: AttributeError) -> Self {
        Self::new(ParseErrorKind::Attribute(err))
    }
}

impl From<SecurityError> for ParseError {
    fn from(err: SecurityError) -> Self {
        Self::new(ParseErrorKind::Security(err))
    }
}

impl From<IOError> for ParseError {
    fn from(err: IOError) -> Self {
        Self::new(ParseErrorKind::IO(err))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            ParseErrorKind::Attribute(err) => err.to_string(),
            ParseErrorKind::Document(err) => err.to_string(),
            ParseErrorKind::IO(err) => err.to_string(),
            ParseErrorKind::Security(err) => err.to_string(),
            ParseErrorKind::Tag(err) => err.to_string(),
        };

        if let Some(loc) = &self.location {
            write!(
                f,
                "at line {}, column {}: {}",
                loc.line, loc.column, base_error
            )?;
        } else {
            write!(f, "Error: {}", base_error)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRoot => write!(f, "Missing root <speak> tag"),
            Self::MultipleTopLevel => {
                write!(f, "Only a single <speak> tag is allowed at the top level")
            }
        }
    }
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTagName(name) => write!(f, "Invalid tag name '{}'", name),
            Self::MismatchedCloseTag { expected, found } => write!(
                f,
                "Closing tag </{}> does not match, expected </{}>",
                found, expected
            ),
            Self::UnexpectedClosingTag => write!(f, "Unexpected closing tag"),
            Self::UnmatchedTag(name) => write!(f, "No closing tag found for <{}>", name),
            Self::UnnamedTag => write!(f, "Tag without a name"),
            Self::UnterminatedTag => write!(f, "Tag is missing its closing '>'"),
        }
    }
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAttributeKey => write!(f, "Attribute key is empty"),
            Self::InvalidAttributeSyntax(key) => write!(
                f,
                "Invalid syntax for attribute '{}', expected key=\"value\"",
                key
            ),
            Self::UnterminatedAttributeValue(key) => {
                write!(f, "Value of attribute '{}' is not closed", key)
            }
        }
    }
}

impl fmt::Display for SecurityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepthExceeded => write!(f, "Maximum nesting depth exceeded"),
            Self::MaxSizeExceeded => write!(f, "Maximum input size exceeded"),
        }
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let source: &(dyn Error + 'static) = self.source.as_deref()?;
        Some(source)
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_location() {
        let err = ParseError::from(TagError::UnmatchedTag("p".to_string()))
            .with_location(Location::new(2, 5));
        assert_eq!(
            err.to_string(),
            "at line 2, column 5: No closing tag found for <p>"
        );
    }

    #[test]
    fn test_display_without_location() {
        let err = ParseError::from(DocumentError::MissingRoot).with_context("reading input");
        let display = err.to_string();
        assert!(display.starts_with("Error: Missing root <speak> tag"));
        assert!(display.contains("Context: reading input"));
    }

    #[test]
    fn test_kind_is_matchable() {
        let err = ParseError::from(AttributeError::EmptyAttributeKey);
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Attribute(AttributeError::EmptyAttributeKey)
        );
        assert!(err.location().is_none());
    }
}

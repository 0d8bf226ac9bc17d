use std::fmt;
use std::ops::Deref;

use crate::formatter::text::flatten;

/// Name every document's single top-level element must carry
pub const ROOT_TAG: &str = "speak";

/// A node of a parsed SSML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text content with entity references already resolved
    Text(String),
    /// A tag with its attributes and children
    Element(Element),
}

/// An SSML tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Attributes in source order; duplicates are kept
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// A `name="value"` pair on a tag. `name` may carry a `prefix:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A validated document: exactly one top-level `<speak>` element.
///
/// Only the parser constructs documents, so the root name is always
/// [`ROOT_TAG`]. The document dereferences to its root [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// Concatenated text content of this node and its descendants
    pub fn flatten(&self) -> String {
        flatten(self)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    /// Value of the first attribute called `name`
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Child elements, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            out.push_str(&flatten(child));
        }
        out
    }
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Document {
    pub(crate) fn from_root(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    pub fn name(&self) -> &str {
        &self.root.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.root.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.root.children
    }

    pub fn text(&self) -> String {
        self.root.text()
    }
}

impl Deref for Document {
    type Target = Element;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl From<Document> for Node {
    fn from(document: Document) -> Self {
        Self::Element(document.root)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

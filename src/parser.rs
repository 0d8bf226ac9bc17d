pub mod attributes;
pub mod close_tag;
pub mod config;
pub mod cursor;
pub mod entity;
pub mod node;
pub mod scanner;
pub mod ssml;
pub mod tag;

pub use node::{Attribute, Document, Element, Node, ROOT_TAG};
pub use ssml::SsmlParser;

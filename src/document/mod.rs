//! Structured registry document.
//!
//! The registry XML is read once into an immutable [`Element`] tree. The
//! tree keeps text runs as separate nodes so that markup such as
//!
//! ```xml
//! <proto>const <ptype>GLubyte</ptype> *<name>glGetString</name></proto>
//! ```
//!
//! can be flattened back into `const GLubyte *glGetString` when type
//! descriptors are derived.

mod element;
mod reader;

pub use element::{Descendants, Element, Node};

use crate::error::Result;

/// A parsed registry document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wrap an already-built root element.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parse a document from raw XML bytes.
    pub fn parse(input: &[u8]) -> Result<Self> {
        let root = reader::TreeReader::new().read(input)?;
        tracing::debug!(root = %root.tag, "parsed registry document");
        Ok(Self { root })
    }

    /// Parse a document from XML text.
    pub fn parse_str(input: &str) -> Result<Self> {
        Self::parse(input.as_bytes())
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }
}

//! Immutable element tree with ElementTree-style navigation.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::error::{RegistryError, Result};

/// A child of an [`Element`]: either a nested element or a run of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One XML element with its attributes and children in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: SmolStr,
    pub attributes: IndexMap<SmolStr, String>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute.
    pub fn with_attr(mut self, key: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder: append a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Builder: append a text run.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value, or a `Missing` error naming `tag@attr`.
    pub fn required_attr(&self, name: &str) -> Result<&str> {
        self.attr(name)
            .ok_or_else(|| RegistryError::missing_attribute(format!("{}@{}", self.tag, name)))
    }

    /// Direct element children in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First direct child with the given tag.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.tag == tag)
    }

    /// First direct child with the given tag, or a `Missing` error.
    pub fn required_child(&self, tag: &str) -> Result<&Element> {
        self.find(tag)
            .ok_or_else(|| RegistryError::missing_element(format!("{}/{}", self.tag, tag)))
    }

    /// All direct children with the given tag.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements().filter(move |e| e.tag == tag)
    }

    /// Pre-order walk over this element and all descendants carrying `tag`.
    pub fn descendants<'a>(&'a self, tag: &'a str) -> Descendants<'a> {
        Descendants {
            stack: vec![self],
            tag,
        }
    }

    /// Text directly inside the element, before its first child element.
    pub fn text(&self) -> Option<&str> {
        match self.children.first() {
            Some(Node::Text(t)) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Every text fragment under this element, in document order.
    pub fn itertext(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    /// Concatenation of [`Element::itertext`].
    pub fn all_text(&self) -> String {
        self.itertext().concat()
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        for node in &self.children {
            match node {
                Node::Text(t) => out.push(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Iterator returned by [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
    tag: &'a str,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(element) = self.stack.pop() {
            // Children pushed in reverse so they pop in document order.
            let children: Vec<&Element> = element.child_elements().collect();
            self.stack.extend(children.into_iter().rev());
            if element.tag == self.tag {
                return Some(element);
            }
        }
        None
    }
}

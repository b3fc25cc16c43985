//! quick-xml event loop that builds an [`Element`] tree.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::element::{Element, Node};
use crate::error::{RegistryError, Result};

/// Builds an element tree from raw XML bytes.
pub(super) struct TreeReader {
    /// Open elements, innermost last.
    stack: Vec<Element>,
    /// Completed root element.
    root: Option<Element>,
}

impl TreeReader {
    pub(super) fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
        }
    }

    pub(super) fn read(mut self, input: &[u8]) -> Result<Element> {
        let mut reader = Reader::from_reader(input);
        // Whitespace is significant inside <proto>/<param> markup.
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let element = Self::start_element(e)?;
                    self.stack.push(element);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = Self::start_element(e)?;
                    self.close(element)?;
                }
                Ok(Event::End(_)) => {
                    let element = self
                        .stack
                        .pop()
                        .ok_or_else(|| RegistryError::xml("Unexpected closing tag"))?;
                    self.close(element)?;
                }
                Ok(Event::Text(ref t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| RegistryError::xml(format!("Text error: {e}")))?;
                    self.push_text(&text);
                }
                Ok(Event::CData(ref t)) => {
                    let text = std::str::from_utf8(t)
                        .map_err(|e| RegistryError::xml(format!("Invalid CDATA: {e}")))?;
                    self.push_text(text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(RegistryError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = self.stack.last() {
            return Err(RegistryError::xml(format!("Unclosed element <{}>", open.tag)));
        }
        self.root
            .ok_or_else(|| RegistryError::xml("Document has no root element"))
    }

    fn start_element(e: &BytesStart<'_>) -> Result<Element> {
        let name_bytes = e.name();
        let tag = std::str::from_utf8(name_bytes.as_ref())
            .map_err(|e| RegistryError::xml(format!("Invalid tag name: {e}")))?;
        let mut element = Element::new(tag);

        for attr_result in e.attributes() {
            let attr =
                attr_result.map_err(|e| RegistryError::xml(format!("Attribute error: {e}")))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| RegistryError::xml(format!("Attribute key error: {e}")))?;
            let value = attr
                .unescape_value()
                .map_err(|e| RegistryError::xml(format!("Attribute value error: {e}")))?
                .to_string();
            element.attributes.insert(key.into(), value);
        }

        Ok(element)
    }

    fn close(&mut self, element: Element) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None if self.root.is_none() => self.root = Some(element),
            None => {
                return Err(RegistryError::xml(format!(
                    "Multiple root elements: <{}>",
                    element.tag
                )));
            }
        }
        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        // Text outside the root (prolog whitespace) is dropped.
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        match parent.children.last_mut() {
            Some(Node::Text(prev)) => prev.push_str(text),
            _ => parent.children.push(Node::Text(text.to_string())),
        }
    }
}

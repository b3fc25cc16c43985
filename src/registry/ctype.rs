//! C type occurrences in `<proto>` and `<param>` markup.

use std::fmt;

use smol_str::SmolStr;

use crate::document::Element;
use crate::error::{RegistryError, Result};

/// Shape of one type occurrence: base name, pointer depth and constness.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeDescriptor {
    /// Base type name, e.g. `GLuint` or `void`.
    pub name: SmolStr,
    /// Number of `*` in the occurrence.
    pub pointer: usize,
    pub is_const: bool,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<SmolStr>, pointer: usize, is_const: bool) -> Self {
        Self {
            name: name.into(),
            pointer,
            is_const,
        }
    }

    /// Derive the descriptor from a `<proto>` or `<param>` element.
    ///
    /// The base name comes from a nested `<ptype>` when present, otherwise
    /// from the first token of the flattened text after a leading `const`.
    pub fn from_element(element: &Element) -> Result<Self> {
        let text = element.all_text();
        let pointer = text.matches('*').count();
        let is_const = text
            .split(|c: char| c.is_whitespace() || c == '*')
            .any(|token| token == "const");

        let name = match element.find("ptype") {
            Some(ptype) => ptype.all_text(),
            None => {
                let trimmed = text.trim();
                let rest = trimmed
                    .strip_prefix("const")
                    .filter(|r| r.starts_with(char::is_whitespace))
                    .unwrap_or(trimmed);
                rest.split_whitespace()
                    .next()
                    .map(|t| t.trim_end_matches('*').to_string())
                    .filter(|t| !t.is_empty())
                    .ok_or_else(|| {
                        RegistryError::invalid_element(format!(
                            "<{}> has no type text",
                            element.tag
                        ))
                    })?
            }
        };

        Ok(Self {
            name: name.into(),
            pointer,
            is_const,
        })
    }

    /// Declarative rendering: `const(T)`, and for const pointer chains
    /// `const(T*)` followed by the remaining `*`. `struct ` is stripped.
    pub fn to_d(&self) -> String {
        let s = if self.pointer > 1 && self.is_const {
            let mut s = format!("const({}*)", self.name);
            s.push_str(&"*".repeat(self.pointer - 1));
            s
        } else {
            let mut s = if self.is_const {
                format!("const({})", self.name)
            } else {
                self.name.to_string()
            };
            s.push_str(&"*".repeat(self.pointer));
            s
        };
        s.replace("struct ", "")
    }

    /// Volt uses the same declarative form.
    pub fn to_volt(&self) -> String {
        self.to_d()
    }

    /// Call-compatible C rendering: `const T**`.
    pub fn to_c(&self) -> String {
        let mut s = if self.is_const {
            format!("const {}", self.name)
        } else {
            self.name.to_string()
        };
        s.push_str(&"*".repeat(self.pointer));
        s
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_d())
    }
}

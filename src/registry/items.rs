//! Value types derived from the registry tree.

use std::fmt;
use std::hash::{Hash, Hasher};

use smol_str::SmolStr;

use super::ctype::TypeDescriptor;
use crate::document::Element;
use crate::error::{RegistryError, Result};

// ============================================================================
// TYPES & GROUPS
// ============================================================================

/// Raw text of one `<types>` block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeAlias {
    pub raw: String,
}

impl TypeAlias {
    pub fn from_element(element: &Element) -> Self {
        Self {
            raw: element.all_text(),
        }
    }

    /// Preprocessor directives (`#include`, `#define`) are not emitted as
    /// ordinary type declarations.
    pub fn is_preprocessor(&self) -> bool {
        self.raw.contains('#')
    }
}

/// A named grouping of constant names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Group {
    pub name: SmolStr,
    /// Member constant names in document order.
    pub enums: Vec<SmolStr>,
}

impl Group {
    pub fn from_element(element: &Element) -> Result<Self> {
        let name = element.required_attr("name")?.into();
        let enums = element
            .child_elements()
            .map(|e| e.required_attr("name").map(SmolStr::from))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { name, enums })
    }
}

// ============================================================================
// ENUMS
// ============================================================================

/// One named constant.
///
/// Namespace, type, group, vendor and comment are inherited from the
/// enclosing `<enums>` block. Equality and hashing use the name only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnumConst {
    pub name: SmolStr,
    pub value: String,
    pub namespace: SmolStr,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: Option<SmolStr>,
    pub group: Option<SmolStr>,
    pub vendor: Option<SmolStr>,
    pub comment: String,
    /// The entry's own `alias` attribute.
    pub alias: Option<SmolStr>,
    /// The entry's own `api` attribute.
    pub api: Option<SmolStr>,
}

/// Attributes of an `<enums>` block inherited by each of its entries.
#[derive(Clone, Debug, Default)]
pub(crate) struct EnumBlock {
    pub namespace: SmolStr,
    pub ty: Option<SmolStr>,
    pub group: Option<SmolStr>,
    pub vendor: Option<SmolStr>,
    pub comment: String,
}

impl EnumBlock {
    pub(crate) fn from_element(element: &Element) -> Result<Self> {
        Ok(Self {
            namespace: element.required_attr("namespace")?.into(),
            ty: element.attr("type").map(SmolStr::from),
            group: element.attr("group").map(SmolStr::from),
            vendor: element.attr("vendor").map(SmolStr::from),
            comment: element.attr("comment").unwrap_or_default().to_string(),
        })
    }
}

impl EnumConst {
    pub fn new(name: impl Into<SmolStr>, value: impl Into<String>, namespace: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            namespace: namespace.into(),
            ty: None,
            group: None,
            vendor: None,
            comment: String::new(),
            alias: None,
            api: None,
        }
    }

    pub(crate) fn from_element(element: &Element, block: &EnumBlock) -> Result<Self> {
        Ok(Self {
            name: element.required_attr("name")?.into(),
            value: element.required_attr("value")?.to_string(),
            namespace: block.namespace.clone(),
            ty: block.ty.clone(),
            group: block.group.clone(),
            vendor: block.vendor.clone(),
            comment: block.comment.clone(),
            alias: element.attr("alias").map(SmolStr::from),
            api: element.attr("api").map(SmolStr::from),
        })
    }
}

impl PartialEq for EnumConst {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EnumConst {}

impl Hash for EnumConst {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for EnumConst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Function name and return type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Proto {
    pub name: SmolStr,
    pub ret: TypeDescriptor,
}

impl Proto {
    pub fn from_element(element: &Element) -> Result<Self> {
        Ok(Self {
            name: named_text(element)?,
            ret: TypeDescriptor::from_element(element)?,
        })
    }
}

impl fmt::Display for Proto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ret, self.name)
    }
}

/// One function parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Param {
    pub group: Option<SmolStr>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: TypeDescriptor,
    pub name: SmolStr,
}

impl Param {
    pub fn from_element(element: &Element) -> Result<Self> {
        Ok(Self {
            group: element.attr("group").map(SmolStr::from),
            ty: TypeDescriptor::from_element(element)?,
            name: named_text(element)?,
        })
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A function signature. Equality and hashing use the function name only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Command {
    pub proto: Proto,
    pub params: Vec<Param>,
}

impl Command {
    pub fn from_element(element: &Element) -> Result<Self> {
        let proto = Proto::from_element(element.required_child("proto")?)?;
        let params = element
            .descendants("param")
            .map(Param::from_element)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { proto, params })
    }

    pub fn name(&self) -> &str {
        &self.proto.name
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.proto.name == other.proto.name
    }
}

impl Eq for Command {}

impl Hash for Command {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.proto.name.hash(state);
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.proto.name)
    }
}

/// Text of the `<name>` child of a proto or param.
fn named_text(element: &Element) -> Result<SmolStr> {
    let name = element.required_child("name")?;
    name.text()
        .map(SmolStr::from)
        .ok_or_else(|| RegistryError::missing_element(format!("{}/name text", element.tag)))
}

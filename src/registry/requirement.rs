//! Resolution of `<require>`/`<remove>` entries against the enum and
//! command tables, and the [`Extension`] type built on it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::items::{Command, EnumConst};
use crate::document::Element;
use crate::error::{RegistryError, Result};

/// Name-keyed table of shared constants.
pub type EnumTable = IndexMap<SmolStr, Arc<EnumConst>>;
/// Name-keyed table of shared commands.
pub type CommandTable = IndexMap<SmolStr, Arc<Command>>;

/// A reference to a constant or a function. Never a copy: the `Arc`
/// points into the model's enum or command table.
#[derive(Clone, Debug)]
pub enum Requirement {
    Enum(Arc<EnumConst>),
    Command(Arc<Command>),
}

impl Requirement {
    pub fn name(&self) -> &str {
        match self {
            Requirement::Enum(e) => &e.name,
            Requirement::Command(c) => c.name(),
        }
    }

    pub fn as_enum(&self) -> Option<&Arc<EnumConst>> {
        match self {
            Requirement::Enum(e) => Some(e),
            Requirement::Command(_) => None,
        }
    }

    pub fn as_command(&self) -> Option<&Arc<Command>> {
        match self {
            Requirement::Command(c) => Some(c),
            Requirement::Enum(_) => None,
        }
    }
}

impl PartialEq for Requirement {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Requirement::Enum(a), Requirement::Enum(b)) => a.name == b.name,
            (Requirement::Command(a), Requirement::Command(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl Eq for Requirement {}

impl Hash for Requirement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        self.name().hash(state);
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup tables a requirement list is resolved against.
#[derive(Clone, Copy)]
pub struct Tables<'a> {
    pub enums: &'a EnumTable,
    pub commands: &'a CommandTable,
}

/// Outcome of resolving one or more blocks of entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolved {
    /// Resolved references in document order.
    pub entries: Vec<Requirement>,
    /// Names that matched nothing in the tables.
    pub unresolved: Vec<SmolStr>,
}

/// Resolve every `enum`/`command` entry of the `block` children of
/// `element` (e.g. all `<require>` blocks), concatenated in document order.
///
/// `type` entries are skipped. Unknown names are dropped from the entry
/// list and recorded in [`Resolved::unresolved`].
pub fn resolve_blocks(element: &Element, block: &str, tables: Tables<'_>) -> Result<Resolved> {
    let mut resolved = Resolved::default();

    for entry in element.find_all(block).flat_map(|b| b.child_elements()) {
        let found = match entry.tag.as_str() {
            "type" => continue,
            "enum" => {
                let name = entry.required_attr("name")?;
                tables.enums.get(name).cloned().map(Requirement::Enum)
            }
            "command" => {
                let name = entry.required_attr("name")?;
                tables.commands.get(name).cloned().map(Requirement::Command)
            }
            other => {
                return Err(RegistryError::invalid_element(format!(
                    "unexpected <{other}> in <{block}> of {}",
                    element.attr("name").unwrap_or(element.tag.as_str())
                )));
            }
        };

        match found {
            Some(requirement) => resolved.entries.push(requirement),
            None => resolved.unresolved.push(entry.required_attr("name")?.into()),
        }
    }

    Ok(resolved)
}

/// A named optional capability and the constants and functions it requires.
///
/// Equality and hashing use the name only.
#[derive(Clone, Debug)]
pub struct Extension {
    pub name: SmolStr,
    require: Resolved,
}

impl Extension {
    pub fn from_element(element: &Element, tables: Tables<'_>) -> Result<Self> {
        Ok(Self {
            name: element.required_attr("name")?.into(),
            require: resolve_blocks(element, "require", tables)?,
        })
    }

    /// Everything required, in document order.
    pub fn require(&self) -> &[Requirement] {
        &self.require.entries
    }

    /// Required constants, in document order.
    pub fn enums(&self) -> impl Iterator<Item = &Arc<EnumConst>> {
        self.require.entries.iter().filter_map(Requirement::as_enum)
    }

    /// Required functions, in document order.
    pub fn functions(&self) -> impl Iterator<Item = &Arc<Command>> {
        self.require.entries.iter().filter_map(Requirement::as_command)
    }

    /// Required names that did not resolve.
    pub fn unresolved(&self) -> &[SmolStr] {
        &self.require.unresolved
    }
}

impl PartialEq for Extension {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Extension {}

impl Hash for Extension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//! Registry object model.
//!
//! [`SpecModel`] wraps a parsed registry [`Document`] and derives its
//! collections lazily, once each, on first access:
//!
//! ```text
//! Document ──► types        Vec<TypeAlias>
//!          ├─► groups       name → Group
//!          ├─► enums        name → Arc<EnumConst>   ─┐
//!          ├─► commands     name → Arc<Command>     ─┤ shared references
//!          ├─► features     api → version → Feature ◄┤
//!          │                + RemovalSet             │
//!          └─► extensions   api → name → Arc<Extension> ◄┘
//! ```
//!
//! Features and extensions hold `Arc`s into the enum and command tables, so
//! the same constant or function is one object everywhere it appears.
//!
//! ## Usage
//!
//! ```ignore
//! use glspec::{SpecModel, Version};
//!
//! let mut spec = SpecModel::from_file("gl.xml")?;
//! spec.set_profile("core")?;
//! let removed = spec.removed()?;
//! let gl33 = spec.features()?.get("gl", &Version::from([3, 3])).unwrap();
//! for func in gl33.functions(removed) {
//!     println!("{} {}", func.proto.ret.to_c(), func);
//! }
//! ```

mod ctype;
mod feature;
mod items;
mod profile;
mod requirement;
mod source;

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use smol_str::SmolStr;

pub use ctype::TypeDescriptor;
pub use feature::{Feature, FeatureIndex, FeatureList, RemovalSet, Version};
pub use items::{Command, EnumConst, Group, Param, Proto, TypeAlias};
pub use profile::Profile;
pub use requirement::{
    CommandTable, EnumTable, Extension, Requirement, Resolved, Tables, resolve_blocks,
};
pub use source::DEFAULT_REGISTRY_URL;

use crate::document::Document;
use crate::error::{RegistryError, Result};
use items::EnumBlock;

/// Extensions keyed by API variant, then by extension name.
pub type ExtensionIndex = IndexMap<SmolStr, IndexMap<SmolStr, Arc<Extension>>>;

/// A registry document plus its lazily derived collections.
#[derive(Debug)]
pub struct SpecModel {
    document: Document,
    profile: Profile,

    types: OnceLock<Vec<TypeAlias>>,
    groups: OnceLock<IndexMap<SmolStr, Group>>,
    enums: OnceLock<EnumTable>,
    commands: OnceLock<CommandTable>,
    features: OnceLock<FeatureIndex>,
    extensions: OnceLock<ExtensionIndex>,

    /// Returned by [`SpecModel::removed`] outside the core profile.
    no_removals: RemovalSet,
}

/// Return the cached value, or derive, cache and return it. Nothing is
/// cached when derivation fails.
fn cached<T>(cell: &OnceLock<T>, derive: impl FnOnce() -> Result<T>) -> Result<&T> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = derive()?;
    Ok(cell.get_or_init(|| value))
}

impl SpecModel {
    /// Wrap an already-parsed document. The profile starts as
    /// [`Profile::Compatibility`].
    pub fn new(document: Document) -> Self {
        Self {
            document,
            profile: Profile::default(),
            types: OnceLock::new(),
            groups: OnceLock::new(),
            enums: OnceLock::new(),
            commands: OnceLock::new(),
            features: OnceLock::new(),
            extensions: OnceLock::new(),
            no_removals: RemovalSet::default(),
        }
    }

    /// The underlying registry document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    // ── Profile ─────────────────────────────────────────────────────

    /// The active profile.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Set the profile from its registry spelling (`core` or
    /// `compatability`). Any other value is rejected and the current
    /// profile is kept.
    pub fn set_profile(&mut self, value: &str) -> Result<()> {
        self.profile = value.parse::<Profile>()?;
        Ok(())
    }

    /// Set the profile from a typed value.
    pub fn set_profile_kind(&mut self, profile: Profile) {
        self.profile = profile;
    }

    /// Everything removed by any feature under [`Profile::Core`]; empty
    /// otherwise. Under core, derives the features if they have not been
    /// derived yet; the compatibility profile never touches them.
    pub fn removed(&self) -> Result<&RemovalSet> {
        match self.profile {
            Profile::Core => Ok(self.features()?.removals()),
            Profile::Compatibility => Ok(&self.no_removals),
        }
    }

    // ── Derived collections ─────────────────────────────────────────

    /// Text of the root `<comment>`.
    pub fn comment(&self) -> Result<&str> {
        let comment = self.document.root().required_child("comment")?;
        Ok(comment.text().unwrap_or_default())
    }

    /// One alias per `<types>` block anywhere in the document.
    pub fn types(&self) -> Result<&[TypeAlias]> {
        cached(&self.types, || {
            let types: Vec<_> = self
                .document
                .root()
                .descendants("types")
                .map(TypeAlias::from_element)
                .collect();
            tracing::debug!(count = types.len(), "derived types");
            Ok(types)
        })
        .map(Vec::as_slice)
    }

    /// Groups keyed by name.
    pub fn groups(&self) -> Result<&IndexMap<SmolStr, Group>> {
        cached(&self.groups, || {
            let mut groups = IndexMap::new();
            for element in self.document.root().required_child("groups")?.child_elements() {
                let group = Group::from_element(element)?;
                groups.insert(group.name.clone(), group);
            }
            tracing::debug!(count = groups.len(), "derived groups");
            Ok(groups)
        })
    }

    /// Constants from every `<enums>` block. A later block's definition of
    /// a name replaces an earlier one.
    pub fn enums(&self) -> Result<&EnumTable> {
        cached(&self.enums, || {
            let mut enums = EnumTable::new();
            for block_element in self.document.root().descendants("enums") {
                let block = EnumBlock::from_element(block_element)?;
                for entry in block_element.child_elements() {
                    match entry.tag.as_str() {
                        "unused" => continue,
                        "enum" => {
                            let e = EnumConst::from_element(entry, &block)?;
                            enums.insert(e.name.clone(), Arc::new(e));
                        }
                        other => {
                            return Err(RegistryError::invalid_element(format!(
                                "unexpected <{other}> in <enums namespace=\"{}\">",
                                block.namespace
                            )));
                        }
                    }
                }
            }
            tracing::debug!(count = enums.len(), "derived enums");
            Ok(enums)
        })
    }

    /// Commands keyed by the name in their `<proto>`.
    pub fn commands(&self) -> Result<&CommandTable> {
        cached(&self.commands, || {
            let mut commands = CommandTable::new();
            for element in self.document.root().required_child("commands")?.child_elements() {
                let command = Command::from_element(element)?;
                commands.insert(command.proto.name.clone(), Arc::new(command));
            }
            tracing::debug!(count = commands.len(), "derived commands");
            Ok(commands)
        })
    }

    /// Every `<feature>`, grouped by API variant and ordered by version,
    /// together with the removal set they accumulate.
    pub fn features(&self) -> Result<&FeatureIndex> {
        cached(&self.features, || {
            let tables = self.tables()?;
            let index = FeatureIndex::build(self.document.root().descendants("feature"), tables)?;
            tracing::debug!(
                count = index.len(),
                removed = index.removals().len(),
                "derived features"
            );
            Ok(index)
        })
    }

    /// Extensions keyed by each API variant in their `supported` list. One
    /// `Arc<Extension>` is shared by all its variants.
    pub fn extensions(&self) -> Result<&ExtensionIndex> {
        cached(&self.extensions, || {
            let tables = self.tables()?;
            let mut index = ExtensionIndex::new();
            for element in self.document.root().required_child("extensions")?.child_elements() {
                let supported = element.required_attr("supported")?;
                let extension = Arc::new(Extension::from_element(element, tables)?);
                for api in supported.split('|') {
                    index
                        .entry(SmolStr::from(api))
                        .or_default()
                        .insert(extension.name.clone(), Arc::clone(&extension));
                }
            }
            tracing::debug!(apis = index.len(), "derived extensions");
            Ok(index)
        })
    }

    fn tables(&self) -> Result<Tables<'_>> {
        Ok(Tables {
            enums: self.enums()?,
            commands: self.commands()?,
        })
    }
}

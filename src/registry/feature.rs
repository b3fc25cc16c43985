//! Versioned feature sets and the removal set they accumulate.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use super::items::{Command, EnumConst};
use super::requirement::{Requirement, Resolved, Tables, resolve_blocks};
use crate::document::Element;
use crate::error::{RegistryError, Result};

// ============================================================================
// VERSION
// ============================================================================

/// Dot-separated feature number, ordered like a tuple: `(1, 5) < (2, 0)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Version(Vec<u32>);

impl Version {
    pub fn new(parts: impl IntoIterator<Item = u32>) -> Self {
        Self(parts.into_iter().collect())
    }

    pub fn parts(&self) -> &[u32] {
        &self.0
    }
}

impl FromStr for Version {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        s.split('.')
            .map(|part| {
                part.trim().parse::<u32>().map_err(|e| {
                    RegistryError::invalid_attribute(format!("feature number `{s}`: {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl<const N: usize> From<[u32; N]> for Version {
    fn from(parts: [u32; N]) -> Self {
        Self(parts.to_vec())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

// ============================================================================
// REMOVAL SET
// ============================================================================

/// Constants and functions removed by some feature, in first-removal order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemovalSet {
    entries: IndexSet<Requirement, FxBuildHasher>,
}

impl RemovalSet {
    /// Reduce the removal lists of `features` (in the given order) into one set.
    pub fn collect<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Self {
        let entries = features
            .into_iter()
            .flat_map(|feature| feature.removals().iter().cloned())
            .collect();
        Self { entries }
    }

    pub fn contains(&self, requirement: &Requirement) -> bool {
        self.entries.contains(requirement)
    }

    pub fn contains_enum(&self, e: &Arc<EnumConst>) -> bool {
        self.entries.contains(&Requirement::Enum(Arc::clone(e)))
    }

    pub fn contains_command(&self, c: &Arc<Command>) -> bool {
        self.entries.contains(&Requirement::Command(Arc::clone(c)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// FEATURE
// ============================================================================

/// One `<feature>`: an API variant at a version, with what it requires and
/// what it removes.
///
/// Building a feature has no side effects. Removals only take effect once
/// all features are reduced into a [`RemovalSet`] and that set is passed to
/// [`Feature::enums`] or [`Feature::functions`].
#[derive(Clone, Debug)]
pub struct Feature {
    pub name: SmolStr,
    pub api: SmolStr,
    pub number: Version,
    require: Resolved,
    remove: Resolved,
}

impl Feature {
    pub fn from_element(element: &Element, tables: Tables<'_>) -> Result<Self> {
        let name: SmolStr = element.required_attr("name")?.into();
        let require = resolve_blocks(element, "require", tables)?;
        let remove = resolve_blocks(element, "remove", tables)?;
        let number: Version = element.required_attr("number")?.parse()?;
        let api = element.required_attr("api")?.into();

        tracing::trace!(
            feature = %name,
            required = require.entries.len(),
            removed = remove.entries.len(),
            "built feature"
        );

        Ok(Self {
            name,
            api,
            number,
            require,
            remove,
        })
    }

    /// Everything required, in document order, ignoring removals.
    pub fn require(&self) -> &[Requirement] {
        &self.require.entries
    }

    /// Everything this feature removes, in document order.
    pub fn removals(&self) -> &[Requirement] {
        &self.remove.entries
    }

    /// Required or removed names that did not resolve.
    pub fn unresolved(&self) -> impl Iterator<Item = &SmolStr> {
        self.require.unresolved.iter().chain(&self.remove.unresolved)
    }

    /// Required constants not present in `removed`.
    pub fn enums<'a>(&'a self, removed: &'a RemovalSet) -> impl Iterator<Item = &'a Arc<EnumConst>> {
        self.require
            .entries
            .iter()
            .filter_map(Requirement::as_enum)
            .filter(move |e| !removed.contains_enum(e))
    }

    /// Required functions not present in `removed`.
    pub fn functions<'a>(
        &'a self,
        removed: &'a RemovalSet,
    ) -> impl Iterator<Item = &'a Arc<Command>> {
        self.require
            .entries
            .iter()
            .filter_map(Requirement::as_command)
            .filter(move |c| !removed.contains_command(c))
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Feature {}

impl std::hash::Hash for Feature {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.number)
    }
}

// ============================================================================
// FEATURE INDEX
// ============================================================================

/// Features of one API variant, ascending by version.
pub type FeatureList = BTreeMap<Version, Feature>;

/// All features keyed by API variant, plus the removal set they produce.
#[derive(Clone, Debug, Default)]
pub struct FeatureIndex {
    by_api: IndexMap<SmolStr, FeatureList>,
    removals: RemovalSet,
}

impl FeatureIndex {
    /// Build every feature first, then reduce their removals.
    ///
    /// Features sharing an `(api, number)` key replace earlier ones in the
    /// index, but the removals of every `<feature>` still count.
    pub fn build<'a>(
        elements: impl IntoIterator<Item = &'a Element>,
        tables: Tables<'_>,
    ) -> Result<Self> {
        let built = elements
            .into_iter()
            .map(|element| Feature::from_element(element, tables))
            .collect::<Result<Vec<_>>>()?;

        let removals = RemovalSet::collect(&built);

        let mut by_api: IndexMap<SmolStr, FeatureList> = IndexMap::new();
        for feature in built {
            by_api
                .entry(feature.api.clone())
                .or_default()
                .insert(feature.number.clone(), feature);
        }

        Ok(Self { by_api, removals })
    }

    /// Features for one API variant.
    pub fn api(&self, api: &str) -> Option<&FeatureList> {
        self.by_api.get(api)
    }

    /// One feature by API variant and version.
    pub fn get(&self, api: &str, number: &Version) -> Option<&Feature> {
        self.api(api)?.get(number)
    }

    /// API variants in first-seen document order.
    pub fn apis(&self) -> impl Iterator<Item = &str> {
        self.by_api.keys().map(SmolStr::as_str)
    }

    /// `(api, features)` pairs in first-seen document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureList)> {
        self.by_api.iter().map(|(api, list)| (api.as_str(), list))
    }

    /// The accumulated removal set, regardless of profile.
    pub fn removals(&self) -> &RemovalSet {
        &self.removals
    }

    pub fn len(&self) -> usize {
        self.by_api.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_api.is_empty()
    }
}

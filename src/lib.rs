//! # glspec
//!
//! Object model for Khronos-style API registry documents (`gl.xml` and
//! friends), for use by binding generators.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! registry  → SpecModel: lazily derived types, groups, enums, commands,
//!   ↓         features (with removal set) and extensions
//! document  → quick-xml reader into an immutable element tree
//!   ↓
//! error     → RegistryError, Result
//! ```

/// Error type shared by every module
mod error;

/// Structured document: element tree and XML reader
pub mod document;

/// Registry object model
pub mod registry;

pub use document::{Document, Element};
pub use error::{RegistryError, Result};
pub use registry::{
    Command, DEFAULT_REGISTRY_URL, EnumConst, Extension, Feature, FeatureIndex, Group, Param,
    Profile, Proto, RemovalSet, Requirement, SpecModel, TypeAlias, TypeDescriptor, Version,
};

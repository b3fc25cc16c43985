//! Construction entry points: raw text, local file, network URL.

use std::path::Path;
use std::str::FromStr;

use super::SpecModel;
use crate::document::Document;
use crate::error::{RegistryError, Result};

/// Location of the upstream OpenGL registry.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/KhronosGroup/OpenGL-Registry/main/xml/gl.xml";

impl SpecModel {
    /// Load from registry XML text.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_bytes(text.as_bytes())
    }

    /// Load from registry XML bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(Document::parse(bytes)?))
    }

    /// Load from a registry file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        tracing::debug!("Loaded registry from {}", path.display());
        Self::from_bytes(&bytes)
    }

    /// Fetch and load a registry document. A single attempt; any transport
    /// or HTTP status failure is returned as [`RegistryError::Fetch`].
    #[cfg(feature = "fetch")]
    pub fn from_url(url: &str) -> Result<Self> {
        let response = reqwest::blocking::get(url)
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| RegistryError::Fetch(format!("{url}: {e}")))?;
        let bytes = response
            .bytes()
            .map_err(|e| RegistryError::Fetch(format!("{url}: {e}")))?;
        tracing::debug!("Fetched registry from {url} ({} bytes)", bytes.len());
        Self::from_bytes(&bytes)
    }

    /// Fetch and load the upstream OpenGL registry.
    #[cfg(feature = "fetch")]
    pub fn from_registry() -> Result<Self> {
        Self::from_url(DEFAULT_REGISTRY_URL)
    }
}

impl FromStr for SpecModel {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

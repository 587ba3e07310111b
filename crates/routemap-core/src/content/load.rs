//! Load a content registry from a JSON document.

use anyhow::{Context, Result};
use std::path::Path;

use super::{ContentRecord, Registry};

impl Registry {
    /// Read a registry from a JSON file holding an array of content records.
    pub fn load_from_path(path: &Path) -> Result<Registry> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read content registry: {}", path.display()))?;
        let registry = Self::from_json_slice(&bytes)
            .with_context(|| format!("parse content registry: {}", path.display()))?;
        tracing::debug!(
            "loaded {} content records from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Parse a registry from JSON bytes. Each entry needs string `path` and `type`;
    /// any other fields are kept on the record.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Registry> {
        let records: Vec<ContentRecord> = serde_json::from_slice(bytes)
            .context("content registry must be a JSON array of records")?;
        Ok(Registry::new(records))
    }
}

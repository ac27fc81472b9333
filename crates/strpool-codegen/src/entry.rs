//! String-table entries and their JSON loader.

use crate::error::{CodegenError, CodegenResult};
use serde::Deserialize;
use std::path::Path;

/// Ids at or above this value are reserved and never get an enum variant.
pub const DEFAULT_ID_LIMIT: u64 = 10_000;

/// One `{ "i": <id>, "str": <value> }` record from the string table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// String-pool identifier
    #[serde(rename = "i")]
    pub id: u64,

    /// Literal string stored under `id`
    #[serde(rename = "str")]
    pub value: String,
}

impl Entry {
    pub fn new(id: u64, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    /// Whether this entry falls in the reserved range excluded from the enum.
    pub fn is_reserved(&self, id_limit: u64) -> bool {
        self.id >= id_limit
    }
}

/// Parse a JSON array of entries, keeping input order.
pub fn parse_entries(json: &str) -> Result<Vec<Entry>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and parse the string table at `path`.
pub fn load_entries(path: impl AsRef<Path>) -> CodegenResult<Vec<Entry>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;

    parse_entries(&content).map_err(|e| CodegenError::json(path, e))
}

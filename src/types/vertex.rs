//! The core vertex struct.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::Value;

/// A named vertex — the atomic unit of a graph.
///
/// Identity is the name alone: the payload and attribute map never
/// participate in equality or hashing.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex {
    /// Unique name within the owning graph.
    pub name: String,
    /// Opaque payload slot.
    pub value: Option<Value>,
    /// Key-value extension map for attribute-style decoration.
    attrs: BTreeMap<String, Value>,
}

impl Vertex {
    /// Create a vertex with an empty payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            attrs: BTreeMap::new(),
        }
    }

    /// Look up an attribute by key.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Set an attribute, replacing any previous value under the same key.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// The full attribute map.
    pub fn attrs(&self) -> &BTreeMap<String, Value> {
        &self.attrs
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

//! The core edge struct.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Value;

/// A connection between two named vertices.
///
/// `Edge` carries no equality implementation on purpose: whether
/// `(a, b)` equals `(b, a)` is decided by the graph's edge factory, not by
/// the struct. Endpoint orientation is whatever the first insertion used.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// First endpoint name, as first inserted.
    pub one: String,
    /// Second endpoint name, as first inserted.
    pub two: String,
    /// Opaque payload slot.
    pub value: Option<Value>,
    /// Key-value extension map for attribute-style decoration.
    attrs: BTreeMap<String, Value>,
}

impl Edge {
    /// Create an edge with an empty payload.
    pub fn new(one: impl Into<String>, two: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            two: two.into(),
            value: None,
            attrs: BTreeMap::new(),
        }
    }

    /// Whether `name` is one of this edge's endpoints.
    pub fn touches(&self, name: &str) -> bool {
        self.one == name || self.two == name
    }

    /// The endpoint opposite `name`, or None when `name` is not an endpoint.
    ///
    /// For a self-loop both endpoints are `name`, and `name` is returned.
    pub fn other_end(&self, name: &str) -> Option<&str> {
        if self.one == name {
            Some(&self.two)
        } else if self.two == name {
            Some(&self.one)
        } else {
            None
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

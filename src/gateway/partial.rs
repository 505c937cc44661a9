//! Partial-update filter.
//!
//! Optional command fields are carried as [`Field`] values. Only `Present`
//! fields reach the outgoing parameter mapping; `Absent` fields are left out
//! entirely so the engine keeps its current value for them.

use serde_json::{Map, Value};

/// An optional field that distinguishes "not given" from any given value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Field<T> {
    /// Not supplied; the receiver keeps its current value
    #[default]
    Absent,
    /// Explicitly supplied, including zero/false/empty
    Present(T),
}

impl<T> Field<T> {
    /// Whether a value was supplied
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    /// Convert into an `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Absent => None,
            Field::Present(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Absent,
        }
    }
}

/// Builds a minimal parameter mapping
#[derive(Debug, Default)]
pub struct ParamsBuilder {
    map: Map<String, Value>,
}

impl ParamsBuilder {
    /// Start an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field that is always sent.
    pub fn required(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.map.insert(key.to_string(), value.into());
        self
    }

    /// Insert a field only when it was supplied.
    pub fn optional<T: Into<Value>>(mut self, key: &str, field: Field<T>) -> Self {
        if let Field::Present(value) = field {
            self.map.insert(key.to_string(), value.into());
        }
        self
    }

    /// Finish the mapping.
    pub fn build(self) -> Map<String, Value> {
        self.map
    }
}

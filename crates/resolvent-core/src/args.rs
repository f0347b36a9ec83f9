//! Caller-supplied arguments and resolution results.
//!
//! Provided values live in one heterogeneous key space: an entry is
//! addressed by parameter name or by position, exactly as the caller
//! supplied it. Lookup uses key-exists semantics (a present null is a
//! value, not an absence) and iteration preserves insertion order, which
//! the type-scanning strategy relies on.

use std::fmt;

use crate::FxIndexMap;
use crate::value::Value;

/// Key of one provided argument: a parameter name or a 0-based position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgKey {
    Name(String),
    Position(u32),
}

impl fmt::Display for ArgKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKey::Name(name) => f.write_str(name),
            ArgKey::Position(position) => write!(f, "#{position}"),
        }
    }
}

impl From<&str> for ArgKey {
    fn from(name: &str) -> Self {
        ArgKey::Name(name.to_string())
    }
}

impl From<String> for ArgKey {
    fn from(name: String) -> Self {
        ArgKey::Name(name)
    }
}

impl From<u32> for ArgKey {
    fn from(position: u32) -> Self {
        ArgKey::Position(position)
    }
}

/// The values the caller supplied for one resolution call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProvidedArgs {
    entries: FxIndexMap<ArgKey, Value>,
}

impl ProvidedArgs {
    pub fn new() -> Self {
        ProvidedArgs::default()
    }

    /// Inserts an entry; re-inserting an existing key replaces the value
    /// but keeps the key's original insertion slot.
    pub fn insert(&mut self, key: impl Into<ArgKey>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.entries.get(&ArgKey::Name(name.to_string()))
    }

    pub fn get_positional(&self, position: u32) -> Option<&Value> {
        self.entries.get(&ArgKey::Position(position))
    }

    pub fn contains_named(&self, name: &str) -> bool {
        self.get_named(name).is_some()
    }

    pub fn contains_positional(&self, position: u32) -> bool {
        self.get_positional(position).is_some()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArgKey, &Value)> {
        self.entries.iter()
    }

    /// Values in insertion order; this is the type-scan order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<ArgKey>, V: Into<Value>> FromIterator<(K, V)> for ProvidedArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = ProvidedArgs::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}

/// The atomic result every strategy yields: which slot, which value.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPair {
    pub position: u32,
    pub value: Value,
}

impl ResolvedPair {
    pub fn new(position: u32, value: impl Into<Value>) -> Self {
        ResolvedPair {
            position,
            value: value.into(),
        }
    }
}

/// Resolved values keyed by parameter position, in resolution order.
pub type ResolvedMap = FxIndexMap<u32, Value>;

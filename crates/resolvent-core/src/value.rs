//! Runtime values flowing through parameter resolution.
//!
//! `Value` covers the data shapes a resolved parameter can take: scalars,
//! ordered sequences, insertion-ordered maps, and `Instance` for service
//! objects that only exist behind a type name (loggers, connections, ...).
//! Configuration roots fetched from a lookup service are `Value` trees,
//! typically bridged from JSON via `From<serde_json::Value>`.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::FxIndexMap;

// =============================================================================
// Instance
// =============================================================================

/// A service object with nominal type identity.
///
/// Carries the concrete type name, the ordered list of interface names the
/// object satisfies, and the object itself as an `Arc<dyn Any>` payload so
/// hosts can recover it with [`Instance::downcast_ref`].
///
/// Two instances are equal iff they share the same payload allocation;
/// cloning an `Instance` (or a `Value` containing one) never deep-copies
/// the underlying object.
#[derive(Clone)]
pub struct Instance {
    type_name: String,
    implements: SmallVec<[String; 2]>,
    payload: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    pub fn new(type_name: impl Into<String>, payload: impl Any + Send + Sync) -> Self {
        Instance {
            type_name: type_name.into(),
            implements: SmallVec::new(),
            payload: Arc::new(payload),
        }
    }

    /// Adds interface names this instance satisfies, in declaration order.
    pub fn implementing<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implements.extend(interfaces.into_iter().map(Into::into));
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn interfaces(&self) -> &[String] {
        &self.implements
    }

    /// Nominal compatibility: `name` is the concrete type or one of the
    /// declared interfaces.
    pub fn is(&self, name: &str) -> bool {
        self.type_name == name || self.implements.iter().any(|i| i == name)
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type_name", &self.type_name)
            .field("implements", &self.implements)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Value
// =============================================================================

/// A runtime value produced or consumed during resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(FxIndexMap<String, Value>),
    Instance(Instance),
}

/// The runtime kind of a [`Value`], used for primitive type matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Map,
    Instance,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Map => "map",
            ValueKind::Instance => "instance",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
            Value::Instance(_) => ValueKind::Instance,
        }
    }

    /// Human-readable type label for diagnostics: the kind name for data
    /// values, the concrete type name for instances.
    pub fn type_label(&self) -> &str {
        match self {
            Value::Instance(instance) => instance.type_name(),
            other => other.kind().as_str(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&FxIndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Value::Instance(instance) => Some(instance),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

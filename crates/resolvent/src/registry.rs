//! A map-backed lookup service for tests and small composition roots.

use resolvent_core::{Container, ContainerError, FxIndexMap, Value};

/// An insertion-ordered, in-memory [`Container`].
///
/// Hosts with a real service container implement [`Container`] on it
/// directly; this registry covers tests and hosts that just need
/// "register these values under these identifiers".
#[derive(Clone, Debug, Default)]
pub struct ServiceRegistry {
    entries: FxIndexMap<String, Value>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        ServiceRegistry::default()
    }

    /// Registers `value` under `id`, replacing any existing entry.
    pub fn register(&mut self, id: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(id.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Container for ServiceRegistry {
    fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    fn get(&self, id: &str) -> Result<Value, ContainerError> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| ContainerError::not_found(id))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ServiceRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut registry = ServiceRegistry::new();
        for (id, value) in iter {
            registry.register(id, value);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = ServiceRegistry::new();
        registry.register("db.host", "localhost").register("db.port", 5432);

        assert!(registry.has("db.host"));
        assert_eq!(registry.get("db.port").unwrap(), Value::Int(5432));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let registry = ServiceRegistry::new();
        let err = registry.get("absent").unwrap_err();
        assert!(matches!(err, ContainerError::NotFound { ref id } if id == "absent"));
    }

    #[test]
    fn test_from_iterator() {
        let registry: ServiceRegistry = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(registry.get("b").unwrap(), Value::Int(2));
    }
}

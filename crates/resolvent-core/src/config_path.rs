//! Traversal of nested configuration values by path segments.
//!
//! A configuration entry is addressed by an ordered list of string
//! segments (`["database", "connections", "mysql"]`). The walker descends
//! one segment at a time and reports failures with the path consumed so
//! far, joined by ` → `. The rendered messages are relied upon by
//! existing deployments and must not be reworded.

use crate::value::Value;

/// Failure while walking a configuration tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A segment named a key that does not exist in the current node.
    /// The consumed path includes the failing segment.
    #[error("Undefined configuration key: {}", .consumed.join(" → "))]
    Missing { consumed: Vec<String> },

    /// Traversal reached a non-indexable node (scalar, null or service
    /// instance) before the path was exhausted. The consumed path stops
    /// at that node, excluding the segment that could not be applied.
    #[error("The configuration value at path '{}' is not accessible", .consumed.join(" → "))]
    Inaccessible { consumed: Vec<String> },
}

impl PathError {
    /// The segments consumed before the walk stopped, as rendered in the
    /// message.
    pub fn consumed(&self) -> &[String] {
        match self {
            PathError::Missing { consumed } | PathError::Inaccessible { consumed } => consumed,
        }
    }
}

/// Walks `root` along `segments` and returns the addressed value.
///
/// Maps are indexed by key, arrays by the segment parsed as a decimal
/// index. Any other node is not indexable. A null addressed by the last
/// segment is returned as-is; descending *through* one fails with
/// [`PathError::Inaccessible`].
///
/// ```
/// use resolvent_core::{config_path, Value};
///
/// let root: Value = serde_json::json!({"database": {"host": "localhost"}}).into();
/// let host = config_path::resolve(&root, &["database".into(), "host".into()]).unwrap();
/// assert_eq!(host, &Value::from("localhost"));
/// ```
pub fn resolve<'a>(root: &'a Value, segments: &[String]) -> Result<&'a Value, PathError> {
    let mut cursor = root;
    for (index, segment) in segments.iter().enumerate() {
        let next = match cursor {
            Value::Map(entries) => entries.get(segment.as_str()),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|position| items.get(position)),
            _ => {
                return Err(PathError::Inaccessible {
                    consumed: segments[..index].to_vec(),
                });
            }
        };
        match next {
            Some(value) => cursor = value,
            None => {
                return Err(PathError::Missing {
                    consumed: segments[..=index].to_vec(),
                });
            }
        }
    }
    Ok(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolves_nested_key() {
        let root = Value::from(json!({"database": {"host": "localhost", "port": 3306}}));
        let value = resolve(&root, &path(&["database", "host"])).unwrap();
        assert_eq!(value, &Value::from("localhost"));
    }

    #[test]
    fn test_missing_key_message_includes_failing_segment() {
        let root = Value::from(json!({"a": {"b": 1}}));
        let err = resolve(&root, &path(&["a", "c"])).unwrap_err();
        assert_eq!(err.consumed(), &path(&["a", "c"])[..]);
        assert_eq!(err.to_string(), "Undefined configuration key: a → c");
    }

    #[test]
    fn test_missing_root_key() {
        let root = Value::from(json!({"existing": "value"}));
        let err = resolve(&root, &path(&["missing"])).unwrap_err();
        assert_eq!(err.to_string(), "Undefined configuration key: missing");
    }

    #[test]
    fn test_deep_missing_key_stops_at_first_failure() {
        let root = Value::from(json!({"app": {"database": {"existing": "value"}}}));
        let err = resolve(&root, &path(&["app", "database", "missing", "key"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Undefined configuration key: app → database → missing"
        );
    }

    #[test]
    fn test_scalar_midway_is_inaccessible() {
        let root = Value::from(json!({"a": 1}));
        let err = resolve(&root, &path(&["a", "b"])).unwrap_err();
        assert_eq!(err.consumed(), &path(&["a"])[..]);
        assert_eq!(
            err.to_string(),
            "The configuration value at path 'a' is not accessible"
        );
    }

    #[test]
    fn test_nested_scalar_excludes_failing_segment() {
        let root = Value::from(json!({"database": {"port": 3306}}));
        let err = resolve(&root, &path(&["database", "port", "details"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The configuration value at path 'database → port' is not accessible"
        );
    }

    #[test]
    fn test_array_segments_parse_as_indexes() {
        let root = Value::from(json!({"servers": ["alpha", "beta"]}));
        let value = resolve(&root, &path(&["servers", "1"])).unwrap();
        assert_eq!(value, &Value::from("beta"));

        let out_of_range = resolve(&root, &path(&["servers", "5"])).unwrap_err();
        assert!(matches!(out_of_range, PathError::Missing { .. }));

        let non_numeric = resolve(&root, &path(&["servers", "name"])).unwrap_err();
        assert_eq!(
            non_numeric.to_string(),
            "Undefined configuration key: servers → name"
        );
    }

    #[test]
    fn test_terminal_null_and_falsy_values_survive() {
        let root = Value::from(json!({
            "test": {"zero": 0, "off": false, "empty": "", "none": null}
        }));
        assert_eq!(resolve(&root, &path(&["test", "zero"])).unwrap(), &Value::Int(0));
        assert_eq!(resolve(&root, &path(&["test", "off"])).unwrap(), &Value::Bool(false));
        assert_eq!(
            resolve(&root, &path(&["test", "empty"])).unwrap(),
            &Value::from("")
        );
        assert_eq!(resolve(&root, &path(&["test", "none"])).unwrap(), &Value::Null);
    }

    #[test]
    fn test_descending_through_null_is_inaccessible() {
        let root = Value::from(json!({"maybe": null}));
        let err = resolve(&root, &path(&["maybe", "inner"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The configuration value at path 'maybe' is not accessible"
        );
    }

    #[test]
    fn test_empty_path_returns_root() {
        let root = Value::from(json!({"a": 1}));
        assert_eq!(resolve(&root, &[]).unwrap(), &root);
    }
}

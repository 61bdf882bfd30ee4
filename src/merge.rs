//! Shallow merge for parsed configuration mappings.
//!
//! Implements top-level merging where later values override earlier ones.
//! Nested mappings under a shared key are replaced wholesale, never merged
//! recursively.

use serde_json::Value;

/// Shallow merge two JSON values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged at the top level only: keys in overlay override
///   keys in base, and a nested object in overlay replaces the base's
///   nested object entirely
/// - Anything else (including a null in overlay) replaces the base value
///
/// # Example
/// ```
/// use serde_json::json;
/// use easyconf::merge::shallow_merge;
///
/// let base = json!({
///     "server": { "port": 8080, "host": "localhost" },
///     "debug": true
/// });
/// let overlay = json!({
///     "server": { "port": 9000 }
/// });
/// let result = shallow_merge(base, overlay);
/// // Result: { "server": { "port": 9000 }, "debug": true }
/// // Note: "host" is gone, because "server" was replaced wholesale.
/// ```
pub fn shallow_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        // Both are objects: overlay's top-level keys win
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                base_map.insert(key, overlay_value);
            }
            Value::Object(base_map)
        }
        // Any other case: overlay replaces base entirely
        (_, overlay) => overlay,
    }
}

/// Merge multiple values in order, with later values taking precedence.
///
/// Equivalent to folding `shallow_merge` over the list.
pub fn shallow_merge_all(values: impl IntoIterator<Item = Value>) -> Value {
    values.into_iter().fold(Value::Null, shallow_merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_simple_objects() {
        let base = json!({"a": 1, "b": 2});
        let overlay = json!({"b": 3, "c": 4});
        let result = shallow_merge(base, overlay);
        assert_eq!(result, json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn test_merge_disjoint_objects() {
        let base = json!({"x": 1});
        let overlay = json!({"y": 2});
        let result = shallow_merge(base, overlay);
        assert_eq!(result, json!({"x": 1, "y": 2}));
    }

    #[test]
    fn test_nested_objects_replaced_not_merged() {
        let base = json!({
            "server": {"host": "localhost", "port": 8080},
            "debug": true
        });
        let overlay = json!({
            "server": {"port": 9000}
        });
        let result = shallow_merge(base, overlay);
        assert_eq!(
            result,
            json!({
                "server": {"port": 9000},
                "debug": true
            })
        );
    }

    #[test]
    fn test_arrays_replaced_not_merged() {
        let base = json!({"items": [1, 2, 3]});
        let overlay = json!({"items": [4, 5]});
        let result = shallow_merge(base, overlay);
        assert_eq!(result, json!({"items": [4, 5]}));
    }

    #[test]
    fn test_null_in_overlay_overwrites() {
        let base = json!({"a": 1, "b": 2});
        let overlay = json!({"a": null});
        let result = shallow_merge(base, overlay);
        assert_eq!(result, json!({"a": null, "b": 2}));
    }

    #[test]
    fn test_merge_all() {
        let values = vec![json!({"a": 1}), json!({"b": 2}), json!({"a": 3, "c": 4})];
        let result = shallow_merge_all(values);
        assert_eq!(result, json!({"a": 3, "b": 2, "c": 4}));
    }

    #[test]
    fn test_merge_all_empty_is_null() {
        assert_eq!(shallow_merge_all(Vec::new()), Value::Null);
    }

    #[test]
    fn test_overlay_replaces_primitive_with_object() {
        let base = json!({"value": 42});
        let overlay = json!({"value": {"nested": true}});
        let result = shallow_merge(base, overlay);
        assert_eq!(result, json!({"value": {"nested": true}}));
    }

    #[test]
    fn test_overlay_replaces_object_with_primitive() {
        let base = json!({"value": {"nested": true}});
        let overlay = json!({"value": 42});
        let result = shallow_merge(base, overlay);
        assert_eq!(result, json!({"value": 42}));
    }
}

//! Deep merge of an operator-supplied YAML document over the compiled defaults.
//!
//! Mappings merge recursively; sequences and scalars are replaced wholesale.
//! A community's goal list replaces the default list, it is never appended to.

use serde_json::Value;

/// Deep merge two JSON values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged recursively: keys in overlay override keys in base
/// - Arrays, strings, numbers, booleans are replaced entirely
/// - If overlay is null, the base value is preserved (a blank `key:` line in
///   the operator document means "not specified", not "erase the default")
///
/// Keys present only in the overlay pass through unchanged, so the result may
/// be a superset of the default shape (e.g. provider-specific discord fields).
///
/// # Example
/// ```
/// use serde_json::json;
/// use pool_dash::config::deep_merge;
///
/// let base = json!({
///     "theme": { "mode": "dark", "primary_color": "#8B5CF6" },
///     "goals": { "items": [{ "id": "rig" }] }
/// });
/// let overlay = json!({
///     "theme": { "mode": "light" },
///     "goals": { "items": [] }
/// });
/// let result = deep_merge(base, overlay);
/// // Result: { "theme": { "mode": "light", "primary_color": "#8B5CF6" },
/// //           "goals": { "items": [] } }
/// ```
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        // Both are objects: merge recursively
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged_value = if let Some(base_value) = base_map.remove(&key) {
                    deep_merge(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_map.insert(key, merged_value);
            }
            Value::Object(base_map)
        }
        // Overlay is null: preserve base (null means "not specified")
        (base, Value::Null) => base,
        // Any other case: overlay replaces base entirely
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_totality_keeps_all_default_keys() {
        let base = json!({"pool": {"name": "Community Mining Pool"}, "pages": {"home": true}});
        let overlay = json!({});
        let result = deep_merge(base.clone(), overlay);
        assert_eq!(result, base);
    }

    #[test]
    fn test_scalar_override_wins() {
        let base = json!({"theme": {"mode": "dark", "border_radius": "12px"}});
        let overlay = json!({"theme": {"mode": "light"}});
        let result = deep_merge(base, overlay);
        assert_eq!(
            result,
            json!({"theme": {"mode": "light", "border_radius": "12px"}})
        );
    }

    #[test]
    fn test_sequences_replaced_not_merged() {
        let base = json!({"goals": {"items": [{"id": "electricity"}, {"id": "rig"}]}});
        let overlay = json!({"goals": {"items": [{"id": "vps"}]}});
        let result = deep_merge(base, overlay);
        assert_eq!(result, json!({"goals": {"items": [{"id": "vps"}]}}));
    }

    #[test]
    fn test_null_preserves_base() {
        let base =
            json!({"pool": {"name": "Community Mining Pool", "tagline": "Mining for the community"}});
        let overlay = json!({"pool": {"name": null}});
        let result = deep_merge(base, overlay);
        assert_eq!(
            result,
            json!({"pool": {"name": "Community Mining Pool", "tagline": "Mining for the community"}})
        );
    }

    #[test]
    fn test_extra_operator_keys_pass_through() {
        let base = json!({"discord": {"enabled": false}});
        let overlay =
            json!({"discord": {"enabled": true, "webhook_url": "https://example.com/hook"}});
        let result = deep_merge(base, overlay);
        assert_eq!(
            result,
            json!({"discord": {"enabled": true, "webhook_url": "https://example.com/hook"}})
        );
    }

    #[test]
    fn test_deep_nested_merge() {
        let base = json!({
            "coins": {
                "monero1": {"ticker": "XMR", "color": "#FF6600", "algo": "randomx"}
            }
        });
        let overlay = json!({
            "coins": {
                "monero1": {"color": "#F26822"},
                "tari1": {"ticker": "XTM"}
            }
        });
        let result = deep_merge(base, overlay);
        assert_eq!(
            result,
            json!({
                "coins": {
                    "monero1": {"ticker": "XMR", "color": "#F26822", "algo": "randomx"},
                    "tari1": {"ticker": "XTM"}
                }
            })
        );
    }

    #[test]
    fn test_overlay_scalar_replaces_object() {
        // Type mismatch at a key is not an error: the override wins outright.
        let base = json!({"celebrations": {"enabled": false, "style": "none"}});
        let overlay = json!({"celebrations": "off"});
        let result = deep_merge(base, overlay);
        assert_eq!(result, json!({"celebrations": "off"}));
    }

    #[test]
    fn test_overlay_sequence_replaces_object() {
        let base = json!({"goals": {"enabled": false}});
        let overlay = json!({"goals": ["a", "b"]});
        let result = deep_merge(base, overlay);
        assert_eq!(result, json!({"goals": ["a", "b"]}));
    }

    #[test]
    fn test_overlay_object_replaces_scalar() {
        let base = json!({"border_radius": "12px"});
        let overlay = json!({"border_radius": {"top": "4px"}});
        let result = deep_merge(base, overlay);
        assert_eq!(result, json!({"border_radius": {"top": "4px"}}));
    }
}

//! Lenient decoding for portal JSON fields
//!
//! The portal server serializes database rows as-is, so the same column can
//! arrive as a string, a number, a boolean or `null` depending on its SQL type.
//! These helpers normalize scalars for the models in this module.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convert a JSON scalar into display text. `null` and `""` are absent.
pub fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Decode any scalar into an optional string
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_string))
}

/// Decode a numeric id that may be sent as a number or a numeric string
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Decode a truthy flag (`true`, `1`, `"1"`, `"true"`, `"yes"`)
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"),
        _ => false,
    })
}

/// Decode a list that may be sent as a JSON array or a comma-separated string
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(scalar_to_string).collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "opt_string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "opt_id")]
        id: Option<i64>,
        #[serde(default, deserialize_with = "flag")]
        flag: bool,
        #[serde(default, deserialize_with = "string_list")]
        list: Vec<String>,
    }

    #[test]
    fn test_scalars_become_text() {
        let sample: Sample = serde_json::from_str(r#"{"text": 78.5}"#).unwrap();
        assert_eq!(sample.text.as_deref(), Some("78.5"));

        let sample: Sample = serde_json::from_str(r#"{"text": ""}"#).unwrap();
        assert_eq!(sample.text, None);

        let sample: Sample = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(sample.text, None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.text, None);
        assert_eq!(sample.id, None);
        assert!(!sample.flag);
        assert!(sample.list.is_empty());
    }

    #[test]
    fn test_ids_and_flags() {
        let sample: Sample = serde_json::from_str(r#"{"id": "42", "flag": 1}"#).unwrap();
        assert_eq!(sample.id, Some(42));
        assert!(sample.flag);

        let sample: Sample = serde_json::from_str(r#"{"id": 7, "flag": "0"}"#).unwrap();
        assert_eq!(sample.id, Some(7));
        assert!(!sample.flag);
    }

    #[test]
    fn test_list_from_csv_or_array() {
        let sample: Sample = serde_json::from_str(r#"{"list": "cse, it,,entc"}"#).unwrap();
        assert_eq!(sample.list, vec!["cse", "it", "entc"]);

        let sample: Sample = serde_json::from_str(r#"{"list": ["all"]}"#).unwrap();
        assert_eq!(sample.list, vec!["all"]);
    }
}

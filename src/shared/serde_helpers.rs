//! Serde helpers for partial-update request bodies.

use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};

/// Distinguish an absent field from an explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// - field missing → `None` (leave unchanged)
/// - field `null` → `Some(None)` (clear)
/// - field set → `Some(Some(value))`
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Treat an empty query value (`?status=`) as if the key were absent.
///
/// Use with `#[serde(default, deserialize_with = "empty_string_as_none")]`.
pub fn empty_string_as_none<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => {
            let value: StrDeserializer<'_, D::Error> = value.into_deserializer();
            T::deserialize(value).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        notes: Option<Option<String>>,
    }

    #[test]
    fn test_double_option_states() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.notes, None);

        let cleared: Patch = serde_json::from_str(r#"{"notes": null}"#).unwrap();
        assert_eq!(cleared.notes, Some(None));

        let set: Patch = serde_json::from_str(r#"{"notes": "gift idea"}"#).unwrap();
        assert_eq!(set.notes, Some(Some("gift idea".to_string())));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "lowercase")]
    enum Color {
        Red,
    }

    #[derive(Debug, Deserialize)]
    struct Filter {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        color: Option<Color>,
    }

    #[test]
    fn test_empty_string_as_none() {
        let absent: Filter = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.color, None);

        let empty: Filter = serde_json::from_str(r#"{"color": ""}"#).unwrap();
        assert_eq!(empty.color, None);

        let set: Filter = serde_json::from_str(r#"{"color": "red"}"#).unwrap();
        assert_eq!(set.color, Some(Color::Red));

        assert!(serde_json::from_str::<Filter>(r#"{"color": "blue"}"#).is_err());
    }
}

//! Serde helpers for optional backend properties.
//!
//! Unset properties come back as either a missing key or an explicit `null`.
//! `#[serde(default)]` only covers the first case.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, mapping `null` to `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing key decodes the same way.
///
/// # Errors
///
/// Fails when a present, non-null value does not decode as `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "null_as_default")]
        note: String,
        #[serde(default, deserialize_with = "null_as_default")]
        amount: f64,
    }

    #[test]
    fn null_and_missing_both_decode_to_default() {
        let row: Row = serde_json::from_str(r#"{"note":null,"amount":null}"#).unwrap();
        assert!(row.note.is_empty());
        assert!(row.amount.abs() < f64::EPSILON);

        let row: Row = serde_json::from_str("{}").unwrap();
        assert!(row.note.is_empty());
    }

    #[test]
    fn present_values_still_type_check() {
        let row: Row = serde_json::from_str(r#"{"note":"hi","amount":2.5}"#).unwrap();
        assert_eq!(row.note, "hi");
        assert!(serde_json::from_str::<Row>(r#"{"note":7}"#).is_err());
    }
}

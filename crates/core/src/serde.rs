//! Serde helper functions for form-style pattern payloads.
//!
//! Date pickers and number inputs submit empty strings for cleared fields,
//! so these helpers treat empty values as `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Expects format: YYYY-MM-DD
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// A number that may arrive as a JSON number, a numeric string, or an empty string.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

/// Deserialize an optional number, accepting numeric strings and treating
/// empty strings as None.
pub fn deserialize_optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value: Option<NumberOrString<T>> = Option::deserialize(deserializer)?;
    match value {
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) if !s.trim().is_empty() => s
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        date_field: Option<NaiveDate>,
        #[serde(default, deserialize_with = "deserialize_optional_number")]
        number_field: Option<u8>,
    }

    #[test]
    fn test_deserialize_optional_date_empty() {
        let json = r#"{"date_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.date_field, None);
    }

    #[test]
    fn test_deserialize_optional_date_value() {
        let json = r#"{"date_field": "2024-01-15"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.date_field,
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_deserialize_optional_date_invalid() {
        let json = r#"{"date_field": "15/01/2024"}"#;
        assert!(serde_json::from_str::<TestStruct>(json).is_err());
    }

    #[test]
    fn test_deserialize_optional_number_forms() {
        let result: TestStruct = serde_json::from_str(r#"{"number_field": 3}"#).unwrap();
        assert_eq!(result.number_field, Some(3));

        let result: TestStruct = serde_json::from_str(r#"{"number_field": "4"}"#).unwrap();
        assert_eq!(result.number_field, Some(4));

        let result: TestStruct = serde_json::from_str(r#"{"number_field": ""}"#).unwrap();
        assert_eq!(result.number_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"number_field": null}"#).unwrap();
        assert_eq!(result.number_field, None);

        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.number_field, None);
    }

    #[test]
    fn test_deserialize_optional_number_invalid() {
        assert!(serde_json::from_str::<TestStruct>(r#"{"number_field": "abc"}"#).is_err());
    }
}

//! Serde helpers for venue number formats.

use crate::error::ExchangeError;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::precision::decimal_places;

/// A venue number that may arrive as a JSON string (`"0.00001664"`) or a JSON
/// number (`31690`). The original text is kept so precision can be inferred.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumStr(String);

impl NumStr {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_f64(&self) -> Result<f64, ExchangeError> {
        self.0
            .trim()
            .parse::<f64>()
            .map_err(|e| ExchangeError::Parse(format!("Invalid number '{}': {}", self.0, e)))
    }

    /// Decimal places in the reported text.
    pub fn precision(&self) -> u32 {
        decimal_places(&self.0)
    }
}

impl fmt::Display for NumStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NumStr {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Serialize for NumStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NumStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumStrVisitor;

        impl<'de> Visitor<'de> for NumStrVisitor {
            type Value = NumStr;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NumStr, E> {
                Ok(NumStr(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<NumStr, E> {
                Ok(NumStr(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NumStr, E> {
                Ok(NumStr(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NumStr, E> {
                Ok(NumStr(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<NumStr, E> {
                Ok(NumStr(v.to_string()))
            }
        }

        deserializer.deserialize_any(NumStrVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_strings_and_numbers() {
        let values: Vec<NumStr> =
            serde_json::from_str(r#"["0.00000044", 31690, 16819.26, -3]"#).unwrap();
        assert_eq!(values[0].as_str(), "0.00000044");
        assert_eq!(values[0].precision(), 8);
        assert_eq!(values[1].to_f64().unwrap(), 31690.0);
        assert_eq!(values[2].to_f64().unwrap(), 16819.26);
        assert_eq!(values[2].precision(), 2);
        assert_eq!(values[3].to_f64().unwrap(), -3.0);
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        let value: NumStr = serde_json::from_str(r#""n/a""#).unwrap();
        assert!(matches!(value.to_f64(), Err(ExchangeError::Parse(_))));
    }

    #[test]
    fn test_rejects_other_json_types() {
        assert!(serde_json::from_str::<NumStr>("null").is_err());
        assert!(serde_json::from_str::<NumStr>("[1]").is_err());
    }
}

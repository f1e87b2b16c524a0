//! Permissive deserialization helpers, used with `serde_with`.
//!
//! Values coming from environment variables arrive as strings, while the same settings in a YAML file are usually
//! native booleans. These helpers accept either form.

use std::fmt;

use serde::{
    de::{Error, Unexpected},
    Deserializer,
};
use serde_with::DeserializeAs;

/// Permissively deserializes a boolean.
///
/// Accepts:
///
/// - `true` or `false` as a native boolean
/// - `"true"`/`"false"` or `"1"`/`"0"` as a string (case insensitive, surrounding whitespace ignored)
/// - `1` or `0` as an integer
pub struct PermissiveBool;

impl<'de> DeserializeAs<'de, bool> for PermissiveBool {
    fn deserialize_as<D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean, string, or integer")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Ok(value)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                match value.trim().to_lowercase().as_str() {
                    "true" | "1" => Ok(true),
                    "false" | "0" => Ok(false),
                    _ => Err(Error::invalid_value(
                        Unexpected::Str(value),
                        &"\"true\", \"false\", \"1\" or \"0\" (case insensitive)",
                    )),
                }
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                match value {
                    0 => Ok(false),
                    1 => Ok(true),
                    _ => Err(Error::invalid_value(Unexpected::Signed(value), &"0 or 1")),
                }
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                match value {
                    0 => Ok(false),
                    1 => Ok(true),
                    _ => Err(Error::invalid_value(Unexpected::Unsigned(value), &"0 or 1")),
                }
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_with::serde_as;

    use super::PermissiveBool;

    #[serde_as]
    #[derive(Deserialize)]
    struct Flag {
        #[serde_as(as = "PermissiveBool")]
        enabled: bool,
    }

    fn parse(raw: &str) -> Result<bool, serde_json::Error> {
        serde_json::from_str::<Flag>(raw).map(|flag| flag.enabled)
    }

    #[test]
    fn accepts_native_and_string_forms() {
        assert!(parse(r#"{"enabled": true}"#).unwrap());
        assert!(!parse(r#"{"enabled": false}"#).unwrap());
        assert!(parse(r#"{"enabled": "TRUE"}"#).unwrap());
        assert!(!parse(r#"{"enabled": " false "}"#).unwrap());
        assert!(parse(r#"{"enabled": "1"}"#).unwrap());
        assert!(parse(r#"{"enabled": 1}"#).unwrap());
        assert!(!parse(r#"{"enabled": 0}"#).unwrap());
    }

    #[test]
    fn rejects_other_values() {
        assert!(parse(r#"{"enabled": "yes"}"#).is_err());
        assert!(parse(r#"{"enabled": 2}"#).is_err());
    }
}

//! Custom serde helpers for feed wire formats.

/// (De)serializes a `Decimal` money amount as a JSON string.
///
/// The feed emits totals as exact decimal strings (`"199.99"`), but older
/// producers and hand-written fixtures use bare JSON numbers. Input accepts
/// both; output is always the string form.
pub mod money_compat {
    use rust_decimal::Decimal;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s,
            Raw::Number(n) => n.to_string(),
        };
        Decimal::from_str(&text)
            .map_err(|e| D::Error::custom(format!("Invalid money amount '{}': {}", text, e)))
    }
}

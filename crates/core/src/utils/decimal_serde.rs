//! Serde adapter for `Decimal` fields of hand-edited JSON.
//!
//! Values are written as strings so no precision is lost, and read from
//! either a string (`"188.68"`) or a plain JSON number (`188.68`).

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Text(String),
    Number(serde_json::Number),
}

pub fn serialize<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&decimal.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match RawDecimal::deserialize(deserializer)? {
        RawDecimal::Text(text) => text.trim().to_string(),
        RawDecimal::Number(number) => number.to_string(),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| D::Error::custom(format!("'{}' is not a decimal number", text)))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct Holder {
        #[serde(with = "super")]
        value: Decimal,
    }

    fn read(json: &str) -> Result<Decimal, serde_json::Error> {
        serde_json::from_str::<Holder>(json).map(|h| h.value)
    }

    #[test]
    fn reads_strings_and_numbers() {
        assert_eq!(read(r#"{"value":"188.68"}"#).unwrap(), dec!(188.68));
        assert_eq!(read(r#"{"value":188.68}"#).unwrap(), dec!(188.68));
        assert_eq!(read(r#"{"value":3300}"#).unwrap(), dec!(3300));
        assert_eq!(read(r#"{"value":4.6e-4}"#).unwrap(), dec!(0.00046));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert!(read(r#"{"value":"lots"}"#).is_err());
        assert!(read(r#"{"value":true}"#).is_err());
    }

    #[test]
    fn writes_strings() {
        let json = serde_json::to_string(&Holder { value: dec!(2.50) }).unwrap();
        assert_eq!(json, r#"{"value":"2.50"}"#);
    }
}

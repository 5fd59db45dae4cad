//! Custom serde helpers for the service's loose wire formats.

/// Deserializes an optional price that may arrive as a JSON number, a decimal
/// string (optionally signed, or with a trailing `%`), `null`, an empty string,
/// or be missing. Anything unparseable
/// becomes `None` instead of failing the whole record.
///
/// Use together with `#[serde(default)]`.
pub mod lenient_decimal {
    use rust_decimal::prelude::FromPrimitive;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => Decimal::from_str(&n.to_string())
                .ok()
                .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
            Some(Value::String(s)) => parse(&s),
            _ => None,
        })
    }

    /// Accepts an explicit sign and a trailing `%`, as in `"+0.3%"`.
    fn parse(s: &str) -> Option<Decimal> {
        let s = s.trim().trim_end_matches('%').trim_end();
        Decimal::from_str(s.strip_prefix('+').unwrap_or(s)).ok()
    }
}

/// Deserializes an optional nested object, treating a malformed object the
/// same as a missing one. Joined relations (a price record's commodity or
/// market) can come back partial; the record itself is still usable.
///
/// Use together with `#[serde(default)]`.
pub mod lenient_nested {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| serde_json::from_value(v).ok()))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde::Deserialize;
    use std::str::FromStr;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::lenient_decimal::deserialize")]
        price: Option<Decimal>,
        #[serde(default, deserialize_with = "super::lenient_nested::deserialize")]
        inner: Option<Inner>,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Inner {
        name: String,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decimal_from_number_and_string() {
        assert_eq!(row(r#"{"price": 52.5}"#).price, Some(Decimal::from_str("52.5").unwrap()));
        assert_eq!(row(r#"{"price": "180.00"}"#).price, Some(Decimal::from_str("180.00").unwrap()));
        assert_eq!(row(r#"{"price": 8}"#).price, Some(Decimal::from(8)));
    }

    #[test]
    fn test_decimal_signed_and_percent_strings() {
        assert_eq!(row(r#"{"price": "+5"}"#).price, Some(Decimal::from(5)));
        assert_eq!(row(r#"{"price": "-1.5"}"#).price, Some(Decimal::from_str("-1.5").unwrap()));
        assert_eq!(row(r#"{"price": "0.3%"}"#).price, Some(Decimal::from_str("0.3").unwrap()));
    }

    #[test]
    fn test_decimal_missing_null_or_garbage() {
        assert_eq!(row(r#"{}"#).price, None);
        assert_eq!(row(r#"{"price": null}"#).price, None);
        assert_eq!(row(r#"{"price": ""}"#).price, None);
        assert_eq!(row(r#"{"price": "n/a"}"#).price, None);
    }

    #[test]
    fn test_nested_malformed_becomes_none() {
        assert_eq!(
            row(r#"{"inner": {"name": "Divisoria"}}"#).inner,
            Some(Inner { name: "Divisoria".into() })
        );
        assert_eq!(row(r#"{"inner": {"nom": 3}}"#).inner, None);
        assert_eq!(row(r#"{"inner": null}"#).inner, None);
    }
}

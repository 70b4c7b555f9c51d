//! Lenient decoders for values the backend stores in SQLite.
//!
//! Boolean columns come back as `0`/`1`, `true`/`false` or occasionally as
//! strings, and ids may be serialized either as numbers or numeric strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Truthiness of a loosely typed JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| serde::de::Error::custom(format!("invalid id: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {}", s))),
        other => Err(serde::de::Error::custom(format!("invalid id: {}", other))),
    }
}

pub fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_matches_sqlite_conventions() {
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("yes")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("0")));
        assert!(!is_truthy(&json!("False")));
        assert!(!is_truthy(&json!(null)));
    }

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "lenient_i64")]
        id: i64,
        #[serde(default, deserialize_with = "lenient_opt_i64")]
        order: Option<i64>,
    }

    #[test]
    fn ids_accept_numbers_and_numeric_strings() {
        let p: Probe = serde_json::from_value(json!({"id": "42", "order": 3})).unwrap();
        assert_eq!(p.id, 42);
        assert_eq!(p.order, Some(3));

        let p: Probe = serde_json::from_value(json!({"id": 7, "order": null})).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.order, None);

        assert!(serde_json::from_value::<Probe>(json!({"id": "abc"})).is_err());
    }
}

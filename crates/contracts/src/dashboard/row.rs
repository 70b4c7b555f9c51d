use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One candidate record: column name to scalar cell value, in server order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub Map<String, Value>);

pub const EMAIL_KEY: &str = "email";
pub const NAME_KEY: &str = "name";
pub const STATUS_KEY: &str = "Status";
pub const RESUME_KEY: &str = "resume_path";

impl Row {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Display text of a cell; missing and null cells are empty.
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(value_text).unwrap_or_default()
    }

    /// Non-empty text of a cell, if any.
    pub fn non_empty(&self, column: &str) -> Option<String> {
        let text = self.text(column);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn email(&self) -> Option<String> {
        self.non_empty(EMAIL_KEY)
    }

    pub fn name(&self) -> Option<String> {
        self.non_empty(NAME_KEY)
    }

    pub fn status(&self) -> Option<String> {
        self.non_empty(STATUS_KEY)
    }

    pub fn resume_path(&self) -> Option<String> {
        self.non_empty(RESUME_KEY)
    }

    /// Column names in the order the server sent them.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Row(map)
    }
}

/// Stringify a scalar the way the page shows it: integral floats lose their
/// trailing `.0`, null becomes empty.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

pub fn number_text(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> Row {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn text_handles_every_scalar() {
        let r = row(json!({
            "name": "Asha",
            "age": 23,
            "cgpa": 8.5,
            "score": 90.0,
            "placed": false,
            "notes": null
        }));
        assert_eq!(r.text("name"), "Asha");
        assert_eq!(r.text("age"), "23");
        assert_eq!(r.text("cgpa"), "8.5");
        assert_eq!(r.text("score"), "90");
        assert_eq!(r.text("placed"), "false");
        assert_eq!(r.text("notes"), "");
        assert_eq!(r.text("missing"), "");
    }

    #[test]
    fn distinguished_keys() {
        let r = row(json!({
            "email": "A@x.io",
            "name": "",
            "Status": "Hired",
            "resume_path": "a.pdf"
        }));
        assert_eq!(r.email().as_deref(), Some("A@x.io"));
        assert_eq!(r.name(), None);
        assert_eq!(r.status().as_deref(), Some("Hired"));
        assert_eq!(r.resume_path().as_deref(), Some("a.pdf"));
    }

    #[test]
    fn keys_keep_server_order() {
        let r = row(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let keys: Vec<&str> = r.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}

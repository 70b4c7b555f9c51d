use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dashboard::row::value_text;

/// Client-side validation rules attached to a form field.
///
/// Stored by the backend as a JSON object string. Kept as the raw map so
/// keys of any type (and keys this editor does not know) survive an edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationRules(pub Map<String, Value>);

/// Individually editable rule keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    MinLength,
    MaxLength,
    Pattern,
    ErrorMessage,
}

impl ValidationRule {
    pub const ALL: [ValidationRule; 4] = [
        ValidationRule::MinLength,
        ValidationRule::MaxLength,
        ValidationRule::Pattern,
        ValidationRule::ErrorMessage,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ValidationRule::MinLength => "minLength",
            ValidationRule::MaxLength => "maxLength",
            ValidationRule::Pattern => "pattern",
            ValidationRule::ErrorMessage => "errorMessage",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ValidationRule::MinLength | ValidationRule::MaxLength)
    }
}

impl ValidationRules {
    /// Parse the stored JSON; absent, malformed or non-object input yields
    /// no rules.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => match serde_json::from_str::<Value>(s) {
                Ok(Value::Object(map)) => Self(map),
                _ => Self::default(),
            },
            _ => Self::default(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn get(&self, rule: ValidationRule) -> Option<&Value> {
        self.0.get(rule.key())
    }

    /// Current value of a rule as input text; empty when unset.
    pub fn display(&self, rule: ValidationRule) -> String {
        self.get(rule).map(value_text).unwrap_or_default()
    }

    /// Apply one edited input to its key only: empty removes the rule,
    /// otherwise it is set. Length rules take the leading integer of the
    /// input and are removed when none can be read.
    pub fn apply(&mut self, rule: ValidationRule, input: &str) {
        let value = if input.is_empty() {
            None
        } else if rule.is_integer() {
            parse_leading_int(input).map(Value::from)
        } else {
            Some(Value::String(input.to_string()))
        };
        match value {
            Some(v) => {
                self.0.insert(rule.key().to_string(), v);
            }
            None => {
                self.0.shift_remove(rule.key());
            }
        }
    }
}

fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn saved(rules: &ValidationRules) -> Value {
        serde_json::from_str(&rules.to_json()).unwrap()
    }

    #[test]
    fn malformed_json_is_empty() {
        assert_eq!(ValidationRules::parse(Some("{not json")), ValidationRules::default());
        assert_eq!(ValidationRules::parse(Some("[1,2]")), ValidationRules::default());
        assert_eq!(ValidationRules::parse(None), ValidationRules::default());
        assert_eq!(ValidationRules::parse(Some("  ")), ValidationRules::default());
    }

    #[test]
    fn apply_sets_and_removes() {
        let mut rules = ValidationRules::parse(Some(r#"{"pattern":"^[0-9]+$"}"#));
        rules.apply(ValidationRule::MinLength, "3");
        rules.apply(ValidationRule::MaxLength, "12abc");
        rules.apply(ValidationRule::ErrorMessage, "Digits only");
        rules.apply(ValidationRule::Pattern, "");

        assert_eq!(rules.get(ValidationRule::MinLength), Some(&json!(3)));
        assert_eq!(rules.get(ValidationRule::Pattern), None);
        assert_eq!(
            saved(&rules),
            json!({"minLength": 3, "maxLength": 12, "errorMessage": "Digits only"})
        );
    }

    #[test]
    fn unreadable_length_removes_rule() {
        let mut rules = ValidationRules::parse(Some(r#"{"minLength":4}"#));
        rules.apply(ValidationRule::MinLength, "abc");
        assert_eq!(rules.get(ValidationRule::MinLength), None);
        assert_eq!(rules.to_json(), "{}");
    }

    #[test]
    fn unknown_keys_survive_edits() {
        let mut rules = ValidationRules::parse(Some(r#"{"min":1,"maxLength":5}"#));
        rules.apply(ValidationRule::MaxLength, "8");
        assert_eq!(saved(&rules), json!({"min": 1, "maxLength": 8}));
    }

    #[test]
    fn oddly_typed_rules_survive_edits_to_other_keys() {
        let mut rules = ValidationRules::parse(Some(
            r#"{"minLength":"3","pattern":"^[0-9]+$","errorMessage":"Digits only"}"#,
        ));
        rules.apply(ValidationRule::MaxLength, "10");
        assert_eq!(
            saved(&rules),
            json!({
                "minLength": "3",
                "pattern": "^[0-9]+$",
                "errorMessage": "Digits only",
                "maxLength": 10
            })
        );

        let mut rules = ValidationRules::parse(Some(r#"{"minLength":2.5,"pattern":"^a"}"#));
        rules.apply(ValidationRule::ErrorMessage, "bad");
        assert_eq!(
            saved(&rules),
            json!({"minLength": 2.5, "pattern": "^a", "errorMessage": "bad"})
        );
    }

    #[test]
    fn display_shows_current_values() {
        let rules = ValidationRules::parse(Some(
            r#"{"minLength":2,"maxLength":"9","errorMessage":"Too short"}"#,
        ));
        assert_eq!(rules.display(ValidationRule::MinLength), "2");
        assert_eq!(rules.display(ValidationRule::MaxLength), "9");
        assert_eq!(rules.display(ValidationRule::Pattern), "");
        assert_eq!(rules.display(ValidationRule::ErrorMessage), "Too short");
    }
}

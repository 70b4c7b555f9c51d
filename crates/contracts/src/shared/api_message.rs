use serde::{Deserialize, Serialize};

/// Generic `{message}` / `{error}` envelope returned by mutation endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiMessage {
    /// Server-provided explanation, preferring `error` over `message`.
    pub fn reason(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_prefers_error() {
        let msg: ApiMessage =
            serde_json::from_str(r#"{"message":"ok","error":"Email already exists"}"#).unwrap();
        assert_eq!(msg.reason(), Some("Email already exists"));
    }

    #[test]
    fn reason_falls_back_to_message_and_ignores_blank() {
        let msg: ApiMessage = serde_json::from_str(r#"{"message":"Field added"}"#).unwrap();
        assert_eq!(msg.reason(), Some("Field added"));

        let blank: ApiMessage = serde_json::from_str(r#"{"error":"  "}"#).unwrap();
        assert_eq!(blank.reason(), None);
    }
}

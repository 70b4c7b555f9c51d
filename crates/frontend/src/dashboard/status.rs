//! Status-management rows and per-row save feedback.

use contracts::dashboard::Row;
use std::collections::HashSet;

/// How long "Saving..."/"Saved!" stays before the select is re-enabled.
pub const FEEDBACK_RESET_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusEntry {
    pub email: String,
    pub name: Option<String>,
    pub status: Option<String>,
}

impl StatusEntry {
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "N/A".to_string())
    }
}

/// One entry per distinct email (case-insensitive), first occurrence wins.
/// Rows without an email are skipped.
pub fn unique_candidates(rows: &[Row]) -> Vec<StatusEntry> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter_map(|row| {
            let email = row.email()?;
            if !seen.insert(email.to_lowercase()) {
                return None;
            }
            Some(StatusEntry {
                email,
                name: row.name(),
                status: row.status(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFeedback {
    #[default]
    Idle,
    Saving,
    Saved,
    Error,
}

impl StatusFeedback {
    pub fn text(&self) -> &'static str {
        match self {
            StatusFeedback::Idle => "",
            StatusFeedback::Saving => "Saving...",
            StatusFeedback::Saved => "Saved!",
            StatusFeedback::Error => "Error!",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            StatusFeedback::Idle | StatusFeedback::Saving => "status-feedback",
            StatusFeedback::Saved => "status-feedback status-feedback--ok",
            StatusFeedback::Error => "status-feedback status-feedback--error",
        }
    }

    /// State after the timed reset: errors stay visible, the rest clears.
    pub fn after_reset(self) -> Self {
        match self {
            StatusFeedback::Error => StatusFeedback::Error,
            _ => StatusFeedback::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dedupes_case_insensitively_in_first_seen_order() {
        let rows: Vec<Row> = serde_json::from_value(json!([
            {"email": "b@x.io", "name": "Bea", "Status": "Applied"},
            {"email": "A@x.io", "name": "Ann"},
            {"email": "B@X.IO", "name": "Bea again", "Status": "Hired"},
            {"name": "No email"},
            {"email": "", "name": "Blank email"},
            {"email": "a@x.io", "name": "Ann dup"}
        ]))
        .unwrap();

        let entries = unique_candidates(&rows);
        let emails: Vec<&str> = entries.iter().map(|e| e.email.as_str()).collect();
        assert_eq!(emails, vec!["b@x.io", "A@x.io"]);
        assert_eq!(entries[0].status.as_deref(), Some("Applied"));
        assert_eq!(entries[1].status, None);
    }

    #[test]
    fn missing_name_displays_na() {
        let entry = StatusEntry {
            email: "x@x.io".into(),
            name: None,
            status: None,
        };
        assert_eq!(entry.display_name(), "N/A");
    }

    #[test]
    fn reset_keeps_errors() {
        assert_eq!(StatusFeedback::Saved.after_reset(), StatusFeedback::Idle);
        assert_eq!(StatusFeedback::Saving.after_reset(), StatusFeedback::Idle);
        assert_eq!(StatusFeedback::Error.after_reset(), StatusFeedback::Error);
        assert_eq!(StatusFeedback::Idle.text(), "");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateStatus {
    Applied,
    Shortlisted,
    Interviewed,
    Offered,
    Hired,
    Rejected,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 6] = [
        CandidateStatus::Applied,
        CandidateStatus::Shortlisted,
        CandidateStatus::Interviewed,
        CandidateStatus::Offered,
        CandidateStatus::Hired,
        CandidateStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Applied => "Applied",
            CandidateStatus::Shortlisted => "Shortlisted",
            CandidateStatus::Interviewed => "Interviewed",
            CandidateStatus::Offered => "Offered",
            CandidateStatus::Hired => "Hired",
            CandidateStatus::Rejected => "Rejected",
        }
    }

    /// Exact-match lookup; the backend stores the capitalized form.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/update_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub email: String,
    pub name: String,
    pub status: CandidateStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_labels() {
        for status in CandidateStatus::ALL {
            assert_eq!(CandidateStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CandidateStatus::parse("hired"), None);
    }

    #[test]
    fn request_serializes_status_as_label() {
        let req = UpdateStatusRequest {
            email: "a@x.io".into(),
            name: "Asha".into(),
            status: CandidateStatus::Offered,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"email":"a@x.io","name":"Asha","status":"Offered"}"#
        );
    }
}

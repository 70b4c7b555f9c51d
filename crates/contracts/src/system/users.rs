use crate::shared::serde_helpers::lenient_i64;
use serde::{Deserialize, Serialize};

/// Role is kept as the server sends it (`admin`, `viewer`, or anything else).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

pub const ADMIN_ROLE: &str = "admin";

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Admin accounts are never deletable from the dashboard.
    pub fn can_delete(&self) -> bool {
        !self.is_admin()
    }
}

/// Body of `POST /api/users`; new accounts are always viewers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateViewerDto {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/users/delete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteUserDto {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn admins_are_not_deletable() {
        let users: Vec<User> = serde_json::from_value(json!([
            {"id": 1, "email": "root@x.io", "role": "admin"},
            {"id": "2", "email": "v@x.io", "role": "viewer"},
            {"id": 3, "email": "h@x.io", "role": "hr"}
        ]))
        .unwrap();

        assert!(!users[0].can_delete());
        assert!(users[1].can_delete());
        assert_eq!(users[1].id, 2);
        assert!(users[2].can_delete());
        assert_eq!(users[2].role, "hr");
    }
}

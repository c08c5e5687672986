//! The signed-in user as returned by the backend.

use linkpage_core::UserId;
use serde::{Deserialize, Serialize};

/// A user record. Every field is optional because the backend omits fields
/// the user never filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    #[serde(alias = "_id")]
    pub id: Option<UserId>,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "profile_image")]
    pub profile_image: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_partial_record() {
        let user: UserRecord = serde_json::from_value(json!({
            "_id": "u1",
            "username": "jane",
            "profile_image": "/uploads/jane.png"
        }))
        .unwrap();
        assert_eq!(user.id, Some(UserId::new("u1")));
        assert_eq!(user.username.as_deref(), Some("jane"));
        assert_eq!(user.profile_image.as_deref(), Some("/uploads/jane.png"));
        assert_eq!(user.name, None);
    }
}

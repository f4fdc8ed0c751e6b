//! Users as listed by the backend.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::Selection;

/// Backend identifier of a user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

/// One entry of the user listing: `{"uuid": "...", "name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub uuid: UserId,
    pub name: String,
}

impl UserSummary {
    /// The selection-list option representing this user.
    pub fn to_selection(&self) -> Selection {
        Selection::new(self.uuid.to_string(), self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_listing_shape() {
        let json = r#"[{"uuid":"6ba7b810-9dad-11d1-80b4-00c04fd430c8","name":"Goofy"}]"#;
        let users: Vec<UserSummary> = serde_json::from_str(json).unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Goofy");
        assert_eq!(
            users[0].uuid,
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse().unwrap()
        );
    }

    #[test]
    fn selection_carries_id_and_name() {
        let user = UserSummary {
            uuid: UserId::from_uuid(Uuid::nil()),
            name: "Alice".to_string(),
        };
        let selection = user.to_selection();
        assert_eq!(selection.value, Uuid::nil().to_string());
        assert_eq!(selection.text, "Alice");
        assert!(!selection.is_sentinel());
    }
}

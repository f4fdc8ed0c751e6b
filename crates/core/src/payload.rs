//! Request payloads and drafts built from validated forms.

use serde::{Deserialize, Serialize};

use crate::validation::{Amount, Username};

/// Body of the user-creation request: `{"userName": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    pub user_name: String,
}

impl From<Username> for CreateUserPayload {
    fn from(name: Username) -> Self {
        Self {
            user_name: name.into_inner(),
        }
    }
}

/// A validated coin-creation request. Not sent anywhere yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinDraft {
    pub amount: Amount,
}

/// A validated transfer between two users. Not sent anywhere yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferDraft {
    /// Display name of the acting user, if one is selected.
    pub sender: Option<String>,
    /// Display name of the receiver.
    pub receiver: String,
    /// Option value of the receiver (its identifier).
    pub receiver_id: String,
    pub amount: Amount,
}

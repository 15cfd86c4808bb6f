//! Authenticated user reference.

use gourmet_core::UserId;
use serde::{Deserialize, Serialize};

/// The caller's identity as supplied by the authentication layer.
///
/// Only `id` takes part in authorization decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

impl User {
    #[must_use]
    pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            given_name: None,
            family_name: None,
        }
    }

    /// Returns true if both references name the same user.
    #[must_use]
    pub fn is_same_user(&self, other: &UserId) -> bool {
        &self.id == other
    }
}

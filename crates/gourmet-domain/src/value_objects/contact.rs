//! Contact information value object.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// How to reach a restaurant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    #[validate(length(max = 32, message = "Phone number is too long"))]
    pub phone: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,
}

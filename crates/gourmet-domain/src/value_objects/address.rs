//! Postal address value object.

use gourmet_core::rules::not_blank;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Street address of a restaurant, the input to geolocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(custom(function = "not_blank", message = "Street number is required"))]
    pub street_number: String,

    #[validate(custom(function = "not_blank", message = "Street name is required"))]
    pub street_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[validate(custom(function = "not_blank", message = "City is required"))]
    pub city: String,

    #[serde(default)]
    pub state: String,

    #[validate(custom(function = "not_blank", message = "Postal code is required"))]
    pub postal_code: String,

    #[validate(custom(function = "not_blank", message = "Country is required"))]
    pub country: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.street_number, self.street_name)?;
        if let Some(unit) = &self.unit {
            write!(f, ", {}", unit)?;
        }
        write!(f, ", {}", self.city)?;
        if !self.state.is_empty() {
            write!(f, ", {}", self.state)?;
        }
        write!(f, " {}, {}", self.postal_code, self.country)
    }
}

//! Data Transfer Objects (DTOs).

mod restaurant_dto;
mod review_dto;

pub use restaurant_dto::*;
pub use review_dto::*;

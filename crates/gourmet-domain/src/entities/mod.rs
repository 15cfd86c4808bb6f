//! Domain entities.

mod restaurant;
mod review;

pub use restaurant::*;
pub use review::*;

//! Domain value objects.

mod address;
mod contact;
mod geo;
mod hours;
mod photo;
mod user;

pub use address::*;
pub use contact::*;
pub use geo::*;
pub use hours::*;
pub use photo::*;
pub use user::*;

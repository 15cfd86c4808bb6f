//! Average rating derivation.

use crate::Review;

/// Arithmetic mean of all review ratings, or `0.0` for no reviews.
///
/// The mean is accumulated in `f64` and narrowed once to the stored `f32`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn average_rating(reviews: &[Review]) -> f32 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: f64 = reviews.iter().map(|r| f64::from(r.rating)).sum();
    (sum / reviews.len() as f64) as f32
}

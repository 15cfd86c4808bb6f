//! In-process document store for restaurant aggregates.

use crate::RestaurantRepository;
use async_trait::async_trait;
use gourmet_core::{GourmetError, GourmetResult, Page, PageRequest, RestaurantId};
use gourmet_domain::{GeoPoint, Restaurant};
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use tracing::debug;

/// Document store keeping whole restaurant aggregates in a map.
///
/// Saves are version-checked, so a stale read-modify-write loses with
/// `Conflict` instead of silently overwriting a concurrent save.
#[derive(Component, Default)]
#[shaku(interface = RestaurantRepository)]
pub struct InMemoryRestaurantRepository {
    #[shaku(default)]
    documents: RwLock<HashMap<RestaurantId, Restaurant>>,
}

impl InMemoryRestaurantRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored aggregates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// Filters, orders by name then id, and cuts one page.
    fn query<F>(&self, page: PageRequest, predicate: F) -> Page<Restaurant>
    where
        F: Fn(&Restaurant) -> bool,
    {
        let mut matches: Vec<Restaurant> = self
            .documents
            .read()
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Page::from_vec(matches, page)
    }
}

/// Every whitespace-separated term must appear, case-insensitively, in the
/// name, cuisine, street or city.
fn matches_text(restaurant: &Restaurant, query: &str) -> bool {
    let haystack = format!(
        "{} {} {} {}",
        restaurant.name,
        restaurant.cuisine_type,
        restaurant.address.street_name,
        restaurant.address.city
    )
    .to_lowercase();

    query
        .split_whitespace()
        .all(|term| haystack.contains(&term.to_lowercase()))
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn find_by_id(&self, id: &RestaurantId) -> GourmetResult<Option<Restaurant>> {
        Ok(self.documents.read().get(id).cloned())
    }

    async fn save(&self, restaurant: &Restaurant) -> GourmetResult<Restaurant> {
        let mut documents = self.documents.write();

        let stored_version = documents.get(&restaurant.id).map(|r| r.version);
        match stored_version {
            Some(version) if version != restaurant.version => {
                return Err(GourmetError::conflict(format!(
                    "Restaurant {} was modified concurrently (stored version {}, saving {})",
                    restaurant.id, version, restaurant.version
                )));
            }
            None if restaurant.version != 0 => {
                return Err(GourmetError::conflict(format!(
                    "Restaurant {} was deleted concurrently",
                    restaurant.id
                )));
            }
            _ => {}
        }

        let mut saved = restaurant.clone();
        saved.version = restaurant.version + 1;
        documents.insert(saved.id.clone(), saved.clone());

        debug!("Saved restaurant {} at version {}", saved.id, saved.version);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &RestaurantId) -> GourmetResult<()> {
        let removed = self.documents.write().remove(id).is_some();
        debug!("Deleted restaurant {}: {}", id, removed);
        Ok(())
    }

    async fn find_by_min_rating(
        &self,
        min_rating: f32,
        page: PageRequest,
    ) -> GourmetResult<Page<Restaurant>> {
        Ok(self.query(page, |r| r.average_rating >= min_rating))
    }

    async fn find_by_query_and_min_rating(
        &self,
        query: &str,
        min_rating: f32,
        page: PageRequest,
    ) -> GourmetResult<Page<Restaurant>> {
        Ok(self.query(page, |r| {
            r.average_rating >= min_rating && matches_text(r, query)
        }))
    }

    async fn find_by_location_near(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
        page: PageRequest,
    ) -> GourmetResult<Page<Restaurant>> {
        let center = GeoPoint::new(latitude, longitude);
        Ok(self.query(page, |r| center.is_within(&r.geo_location, radius_km)))
    }

    async fn find_all(&self, page: PageRequest) -> GourmetResult<Page<Restaurant>> {
        Ok(self.query(page, |_| true))
    }
}

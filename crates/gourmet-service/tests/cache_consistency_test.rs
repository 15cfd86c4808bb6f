//! Cached reads never outlive the mutations that affect them.

mod common;

use common::{app, restaurant_request, review_request, user};
use gourmet_core::PageRequest;
use gourmet_service::{CacheRegion, RestaurantSearchQuery};

fn min_rating(min: f32) -> RestaurantSearchQuery {
    RestaurantSearchQuery {
        query: Some(String::new()),
        min_rating: Some(min),
        ..RestaurantSearchQuery::default()
    }
}

#[tokio::test]
async fn test_review_creation_refreshes_rating_search() {
    let app = app();
    let restaurant = app
        .restaurants
        .create_restaurant(restaurant_request("Kiln", "Thai"))
        .await
        .unwrap();

    let before = app
        .restaurants
        .search_restaurants(&min_rating(4.0), PageRequest::first())
        .await
        .unwrap();
    assert!(before.is_empty());
    assert_eq!(app.cache.len(CacheRegion::RestaurantSearch), 1);

    app.reviews
        .create_review(&user("u1"), &restaurant.id, review_request(5))
        .await
        .unwrap();

    let after = app
        .restaurants
        .search_restaurants(&min_rating(4.0), PageRequest::first())
        .await
        .unwrap();
    assert_eq!(after.total_elements(), 1);
    assert_eq!(after.content[0].average_rating, 5.0);
}

#[tokio::test]
async fn test_new_restaurant_appears_in_cached_listing() {
    let app = app();
    let everything = RestaurantSearchQuery::default();

    app.restaurants
        .create_restaurant(restaurant_request("Arabica", "Levantine"))
        .await
        .unwrap();
    let first = app
        .restaurants
        .search_restaurants(&everything, PageRequest::first())
        .await
        .unwrap();
    assert_eq!(first.total_elements(), 1);

    app.restaurants
        .create_restaurant(restaurant_request("Bancone", "Italian"))
        .await
        .unwrap();
    let second = app
        .restaurants
        .search_restaurants(&everything, PageRequest::first())
        .await
        .unwrap();
    assert_eq!(second.total_elements(), 2);
}

#[tokio::test]
async fn test_update_and_delete_refresh_single_reads() {
    let app = app();
    let restaurant = app
        .restaurants
        .create_restaurant(restaurant_request("Lyle's", "British"))
        .await
        .unwrap();

    let cached = app.restaurants.get_restaurant(&restaurant.id).await.unwrap().unwrap();
    assert_eq!(cached.name, "Lyle's");

    app.restaurants
        .update_restaurant(&restaurant.id, restaurant_request("Lyle's Shoreditch", "British"))
        .await
        .unwrap();
    let renamed = app.restaurants.get_restaurant(&restaurant.id).await.unwrap().unwrap();
    assert_eq!(renamed.name, "Lyle's Shoreditch");

    app.restaurants.delete_restaurant(&restaurant.id).await.unwrap();
    assert!(app
        .restaurants
        .get_restaurant(&restaurant.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_review_edit_refreshes_cached_review_reads() {
    let app = app();
    let restaurant = app
        .restaurants
        .create_restaurant(restaurant_request("Rochelle Canteen", "British"))
        .await
        .unwrap();
    let review = app
        .reviews
        .create_review(&user("u1"), &restaurant.id, review_request(2))
        .await
        .unwrap();

    let cached = app.reviews.get_review(&restaurant.id, &review.id).await.unwrap().unwrap();
    assert_eq!(cached.rating, 2);
    let listed = app
        .reviews
        .list_reviews(&restaurant.id, PageRequest::first(), None)
        .await
        .unwrap();
    assert_eq!(listed.content[0].rating, 2);

    app.reviews
        .update_review(&user("u1"), &restaurant.id, &review.id, review_request(4))
        .await
        .unwrap();

    let fresh = app.reviews.get_review(&restaurant.id, &review.id).await.unwrap().unwrap();
    assert_eq!(fresh.rating, 4);
    let relisted = app
        .reviews
        .list_reviews(&restaurant.id, PageRequest::first(), None)
        .await
        .unwrap();
    assert_eq!(relisted.content[0].rating, 4);
}

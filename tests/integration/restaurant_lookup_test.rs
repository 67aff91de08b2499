// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::integration::helpers::{
        network_error, quota_error, sample_restaurants, StubFoodSource,
    };
    use foodie::domain::services::restaurant_lookup::{
        LookupError, RestaurantLookupService, EMPTY_LOCATION_MESSAGE, LOOKUP_FAILED_MESSAGE,
        SAMPLE_DATA_NOTICE,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn test_live_results_are_returned_without_notice() {
        let source = Arc::new(StubFoodSource {
            restaurants: Ok(sample_restaurants()),
            ..Default::default()
        });
        let service = RestaurantLookupService::new(source.clone(), 5);

        let lookup = service.lookup(" Springfield ").await.unwrap();

        assert_eq!(lookup.restaurants, sample_restaurants());
        assert_eq!(lookup.notice, None);
        assert_eq!(source.calls(), vec!["search_restaurants:Springfield:5".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_lookup_for_known_city_narrows_samples() {
        let source = Arc::new(StubFoodSource {
            restaurants: Err(network_error()),
            ..Default::default()
        });
        let service = RestaurantLookupService::new(source, 5);

        let lookup = service.lookup("Port Harcourt").await.unwrap();

        assert_eq!(lookup.restaurants.len(), 1);
        assert_eq!(lookup.restaurants[0].name, "Port Harcourt Seafood Hub");
        assert!(lookup.restaurants[0].is_sample());
        assert_eq!(lookup.notice.as_deref(), Some(SAMPLE_DATA_NOTICE));
    }

    #[tokio::test]
    async fn test_empty_live_result_is_not_replaced() {
        let source = Arc::new(StubFoodSource::default());
        let service = RestaurantLookupService::new(source, 5);

        let lookup = service.lookup("Lagos").await.unwrap();

        assert!(lookup.restaurants.is_empty());
        assert_eq!(lookup.notice, None);
    }

    #[tokio::test]
    async fn test_failed_lookup_elsewhere_surfaces_api_message() {
        let source = Arc::new(StubFoodSource {
            restaurants: Err(quota_error()),
            ..Default::default()
        });
        let service = RestaurantLookupService::new(source, 5);

        let err = service.lookup("Paris").await.unwrap_err();

        assert_eq!(
            err,
            LookupError::Upstream("Your daily points limit of 150 has been reached.".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_lookup_elsewhere_without_message_uses_default() {
        let source = Arc::new(StubFoodSource {
            restaurants: Err(network_error()),
            ..Default::default()
        });
        let service = RestaurantLookupService::new(source, 5);

        let err = service.lookup("Paris").await.unwrap_err();

        assert_eq!(err, LookupError::Upstream(LOOKUP_FAILED_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn test_blank_location_is_rejected() {
        let source = Arc::new(StubFoodSource::default());
        let service = RestaurantLookupService::new(source.clone(), 5);

        let err = service.lookup("  ").await.unwrap_err();

        assert_eq!(err, LookupError::Validation(EMPTY_LOCATION_MESSAGE.to_string()));
        assert_eq!(source.call_count(), 0);
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::domain::fallback;
use crate::domain::models::restaurant::Restaurant;
use crate::domain::search::source::FoodDataSource;
use crate::domain::services::location::{is_location_flagged, mentions_city, mentions_country};

pub const EMPTY_LOCATION_MESSAGE: &str = "Please enter a city in Nigeria.";
pub const SAMPLE_DATA_NOTICE: &str = "Using mock data due to limited API coverage in Nigeria.";
pub const LOOKUP_FAILED_MESSAGE: &str =
    "Failed to fetch restaurants. Try a Nigerian city (e.g., Lagos).";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Upstream(String),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RestaurantLookup {
    pub restaurants: Vec<Restaurant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Stand-alone restaurant search by location.
///
/// Unlike the aggregator, a failed lookup for a known region narrows the
/// sample catalog down to the cities the query names.
pub struct RestaurantLookupService {
    source: Arc<dyn FoodDataSource>,
    distance: u32,
}

impl RestaurantLookupService {
    pub fn new(source: Arc<dyn FoodDataSource>, distance: u32) -> Self {
        Self { source, distance }
    }

    pub async fn lookup(&self, location: &str) -> Result<RestaurantLookup, LookupError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(LookupError::Validation(EMPTY_LOCATION_MESSAGE.to_string()));
        }

        match self.source.search_restaurants(location, self.distance).await {
            Ok(restaurants) => Ok(RestaurantLookup {
                restaurants,
                notice: None,
            }),
            Err(e) if is_location_flagged(location) => {
                warn!("Restaurant lookup for {:?} failed, using samples: {}", location, e);
                Ok(RestaurantLookup {
                    restaurants: samples_for(location),
                    notice: Some(SAMPLE_DATA_NOTICE.to_string()),
                })
            }
            Err(e) => {
                warn!("Restaurant lookup for {:?} failed: {}", location, e);
                let message = e
                    .api_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| LOOKUP_FAILED_MESSAGE.to_string());
                Err(LookupError::Upstream(message))
            }
        }
    }
}

/// Sample restaurants for the cities a query names, or the whole catalog when none match.
pub fn samples_for(location: &str) -> Vec<Restaurant> {
    let country = mentions_country(location);
    let matched: Vec<Restaurant> = fallback::restaurants()
        .iter()
        .filter(|restaurant| {
            country
                || restaurant
                    .city
                    .as_deref()
                    .is_some_and(|city| mentions_city(location, city))
        })
        .cloned()
        .collect();

    if matched.is_empty() {
        fallback::restaurants().to_vec()
    } else {
        matched
    }
}

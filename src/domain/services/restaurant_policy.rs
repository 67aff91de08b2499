// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Restaurant fallback policy for the search aggregator.
//!
//! | live leg      | location-flagged | resolution     |
//! |---------------|------------------|----------------|
//! | ok, N > 0     | any              | `PassThrough`  |
//! | failed        | yes              | `Fallback`     |
//! | ok, 0 results | yes              | `Fallback`     |
//! | failed        | no               | `Unavailable`  |
//! | ok, 0 results | no               | `NotFound`     |

use crate::domain::models::restaurant::Restaurant;
use crate::domain::models::search_result::LegOutcome;

pub const FALLBACK_WARNING: &str = "Live restaurant data is limited; showing sample restaurants.";
pub const NOT_FOUND_WARNING: &str = "No restaurants found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantResolution {
    /// Use the live results verbatim.
    PassThrough,
    /// Replace with the full fallback catalog.
    Fallback,
    /// No restaurants; the live leg failed for this reason.
    Unavailable { reason: String },
    /// No restaurants; the live leg succeeded but found none.
    NotFound,
}

impl RestaurantResolution {
    pub fn warning(&self) -> Option<String> {
        match self {
            RestaurantResolution::PassThrough => None,
            RestaurantResolution::Fallback => Some(FALLBACK_WARNING.to_string()),
            RestaurantResolution::Unavailable { reason } => Some(format!(
                "Failed to fetch restaurants ({}). Restaurant coverage from the food API is limited.",
                reason
            )),
            RestaurantResolution::NotFound => Some(NOT_FOUND_WARNING.to_string()),
        }
    }
}

/// Decide what the restaurant list of a search should be.
///
/// Location flagging wins over the succeeded-but-empty case.
pub fn resolve(outcome: &LegOutcome<Restaurant>, location_flagged: bool) -> RestaurantResolution {
    match (outcome, location_flagged) {
        (LegOutcome::Fetched(items), _) if !items.is_empty() => RestaurantResolution::PassThrough,
        (_, true) => RestaurantResolution::Fallback,
        (LegOutcome::Failed(reason), false) => RestaurantResolution::Unavailable {
            reason: reason.clone(),
        },
        (LegOutcome::Fetched(_), false) => RestaurantResolution::NotFound,
    }
}

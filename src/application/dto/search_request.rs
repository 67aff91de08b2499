// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::product::Product;
use crate::domain::models::recipe::Recipe;
use crate::domain::models::restaurant::Restaurant;
use crate::domain::models::search_result::SearchOutcome;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SearchRequestDto {
    #[validate(length(min = 1, message = "Please enter a search term."))]
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchResponseDto {
    pub query: String,
    pub recipes: Vec<Recipe>,
    pub products: Vec<Product>,
    pub restaurants: Vec<Restaurant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponseDto {
    pub fn from_outcome(query: String, outcome: SearchOutcome) -> Self {
        Self {
            query,
            recipes: outcome.results.recipes,
            products: outcome.results.products,
            restaurants: outcome.results.restaurants,
            warning: outcome.warning,
            error: None,
        }
    }

    /// Every list cleared, one message.
    pub fn failed(query: String, message: String) -> Self {
        Self {
            query,
            recipes: Vec::new(),
            products: Vec::new(),
            restaurants: Vec::new(),
            warning: None,
            error: Some(message),
        }
    }
}

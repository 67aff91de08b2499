// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::pantry::Pantry;
use crate::domain::models::recipe::AmountConversionRequest;
use crate::domain::services::recipe_finder::{RecipeFilters, RecipeQuery};

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct FindRecipesRequestDto {
    #[validate(length(min = 1, message = "Please add at least one ingredient."))]
    pub ingredients: Vec<String>,
    pub diet: Option<String>,
    #[validate(range(min = 1, max = 1440))]
    pub max_ready_minutes: Option<u32>,
    pub cuisine: Option<String>,
    #[validate(range(min = 1, max = 10000))]
    pub page: Option<u32>,
}

impl FindRecipesRequestDto {
    pub fn into_query(self) -> RecipeQuery {
        RecipeQuery {
            pantry: self.ingredients.iter().collect::<Pantry>(),
            filters: RecipeFilters {
                diet: non_blank(self.diet),
                max_ready_minutes: self.max_ready_minutes,
                cuisine: non_blank(self.cuisine),
            },
            page: self.page.unwrap_or(1),
        }
    }
}

/// An empty select box means "any".
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct RecipeDetailsQuery {
    /// Comma-separated missed ingredient names.
    pub missed: Option<String>,
}

impl RecipeDetailsQuery {
    pub fn missed_ingredients(&self) -> Vec<String> {
        self.missed
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ConvertAmountQuery {
    pub amount: f64,
    #[validate(length(min = 1, message = "Source unit is required."))]
    pub source_unit: String,
    #[validate(length(min = 1, message = "Target unit is required."))]
    pub target_unit: String,
}

impl ConvertAmountQuery {
    pub fn into_request(self, ingredient_id: i64) -> AmountConversionRequest {
        AmountConversionRequest {
            ingredient_id,
            source_amount: self.amount,
            source_unit: self.source_unit,
            target_unit: self.target_unit,
        }
    }
}

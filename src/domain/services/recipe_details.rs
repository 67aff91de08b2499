// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::models::recipe::{AmountConversion, AmountConversionRequest, RecipeDetails};
use crate::domain::search::source::FoodDataSource;

pub const DETAILS_FAILED_MESSAGE: &str = "Failed to fetch recipe details.";
pub const CONVERSION_FAILED_MESSAGE: &str = "Failed to convert amount.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecipeDetailsError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Upstream(String),
}

pub struct RecipeDetailsService {
    source: Arc<dyn FoodDataSource>,
}

impl RecipeDetailsService {
    pub fn new(source: Arc<dyn FoodDataSource>) -> Self {
        Self { source }
    }

    /// Fetch recipe information, then substitutes for every missed ingredient.
    ///
    /// Substitute lookups run concurrently; one that fails contributes an
    /// empty list instead of failing the whole call.
    pub async fn details(
        &self,
        recipe_id: i64,
        missed_ingredients: &[String],
    ) -> Result<RecipeDetails, RecipeDetailsError> {
        let information = self
            .source
            .recipe_information(recipe_id)
            .await
            .map_err(|e| {
                warn!("Recipe {} information failed: {}", recipe_id, e);
                RecipeDetailsError::Upstream(
                    e.api_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| DETAILS_FAILED_MESSAGE.to_string()),
                )
            })?;

        let lookups = missed_ingredients.iter().map(|name| {
            let source = self.source.clone();
            async move {
                match source.ingredient_substitutes(name).await {
                    Ok(substitutes) => (name.clone(), substitutes),
                    Err(e) => {
                        debug!("No substitutes for {}: {}", name, e);
                        (name.clone(), Vec::new())
                    }
                }
            }
        });
        let substitutes: BTreeMap<String, Vec<String>> =
            join_all(lookups).await.into_iter().collect();

        Ok(RecipeDetails {
            information,
            substitutes,
        })
    }

    pub async fn convert_amount(
        &self,
        request: &AmountConversionRequest,
    ) -> Result<AmountConversion, RecipeDetailsError> {
        if request.target_unit.trim().is_empty() {
            return Err(RecipeDetailsError::Validation(
                "Target unit is required.".to_string(),
            ));
        }
        self.source.convert_amount(request).await.map_err(|e| {
            warn!(
                "Converting ingredient {} to {} failed: {}",
                request.ingredient_id, request.target_unit, e
            );
            RecipeDetailsError::Upstream(CONVERSION_FAILED_MESSAGE.to_string())
        })
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::fallback;
use crate::domain::models::pantry::Pantry;
use crate::domain::models::recipe::Recipe;
use crate::domain::search::source::FoodDataSource;

pub const EMPTY_PANTRY_MESSAGE: &str = "Please add at least one ingredient.";
pub const MOCK_RECIPES_WARNING: &str = "Failed to fetch recipes. Using mock data.";
pub const PAGE_OUT_OF_RANGE_MESSAGE: &str = "Page number is out of range.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecipeFinderError {
    #[error("{0}")]
    Validation(String),
}

/// 菜谱筛选条件
///
/// 未设置的条件总是匹配
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipeFilters {
    /// 饮食偏好，例如 vegan、gluten-free
    pub diet: Option<String>,
    /// 最长准备时间（分钟）
    pub max_ready_minutes: Option<u32>,
    /// 菜系，例如 Italian
    pub cuisine: Option<String>,
}

impl RecipeFilters {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let time_match = match self.max_ready_minutes {
            Some(max) => recipe.ready_in_minutes.is_some_and(|minutes| minutes <= max),
            None => true,
        };
        let diet_match = self
            .diet
            .as_ref()
            .map_or(true, |diet| recipe.diets.iter().any(|d| d == diet));
        let cuisine_match = self
            .cuisine
            .as_ref()
            .map_or(true, |cuisine| recipe.cuisines.iter().any(|c| c == cuisine));
        time_match && diet_match && cuisine_match
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeQuery {
    pub pantry: Pantry,
    pub filters: RecipeFilters,
    /// 1-based
    pub page: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipePage {
    pub page: u32,
    pub recipes: Vec<Recipe>,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Pantry-driven recipe search with client-side filtering and paging.
pub struct RecipeFinder {
    source: Arc<dyn FoodDataSource>,
    page_size: u32,
}

impl RecipeFinder {
    pub fn new(source: Arc<dyn FoodDataSource>, page_size: u32) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub async fn find(&self, query: &RecipeQuery) -> Result<RecipePage, RecipeFinderError> {
        if query.pantry.is_empty() {
            return Err(RecipeFinderError::Validation(EMPTY_PANTRY_MESSAGE.to_string()));
        }
        let page = query.page.max(1);
        let offset = (page - 1)
            .checked_mul(self.page_size)
            .ok_or_else(|| RecipeFinderError::Validation(PAGE_OUT_OF_RANGE_MESSAGE.to_string()))?;

        match self
            .source
            .find_recipes_by_ingredients(query.pantry.ingredients(), self.page_size, offset)
            .await
        {
            Ok(recipes) => {
                let recipes: Vec<Recipe> = recipes
                    .into_iter()
                    .filter(|recipe| query.filters.matches(recipe))
                    .collect();
                info!("Page {} matched {} recipes after filtering", page, recipes.len());
                let has_more = recipes.len() == self.page_size as usize;
                Ok(RecipePage {
                    page,
                    recipes,
                    has_more,
                    warning: None,
                })
            }
            Err(e) => {
                warn!("Recipe lookup failed, serving mock recipes: {}", e);
                Ok(RecipePage {
                    page,
                    recipes: fallback::recipes().to_vec(),
                    has_more: false,
                    warning: Some(
                        e.api_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| MOCK_RECIPES_WARNING.to_string()),
                    ),
                })
            }
        }
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::ingredient::IngredientSuggestion;
use crate::domain::models::product::{Product, ProductDetails, ProductSuggestion};
use crate::domain::models::recipe::{
    AmountConversion, AmountConversionRequest, Recipe, RecipeInformation,
};
use crate::domain::models::restaurant::Restaurant;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FoodApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Food API returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Invalid API response: {0}")]
    Decode(String),
    #[error("Food API error: {0}")]
    Other(String),
}

impl FoodApiError {
    /// The message the API itself attached to an error response, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            FoodApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// 食品数据源
///
/// 外部食品数据 API 的抽象。所有调用都是只读查询，
/// 失败时返回 `FoodApiError`，由调用方决定如何降级。
#[async_trait]
pub trait FoodDataSource: Send + Sync {
    /// Free-text recipe search, capped at `limit` results.
    async fn search_recipes(&self, query: &str, limit: u32) -> Result<Vec<Recipe>, FoodApiError>;

    /// Free-text packaged-food search, capped at `limit` results.
    async fn search_products(&self, query: &str, limit: u32)
        -> Result<Vec<Product>, FoodApiError>;

    /// Free-text restaurant search within `distance` miles.
    async fn search_restaurants(
        &self,
        query: &str,
        distance: u32,
    ) -> Result<Vec<Restaurant>, FoodApiError>;

    /// Recipes that use the given ingredients, one page at a time.
    async fn find_recipes_by_ingredients(
        &self,
        ingredients: &[String],
        number: u32,
        offset: u32,
    ) -> Result<Vec<Recipe>, FoodApiError>;

    async fn recipe_information(&self, id: i64) -> Result<RecipeInformation, FoodApiError>;

    async fn ingredient_substitutes(&self, ingredient: &str) -> Result<Vec<String>, FoodApiError>;

    async fn convert_amount(
        &self,
        request: &AmountConversionRequest,
    ) -> Result<AmountConversion, FoodApiError>;

    async fn suggest_ingredients(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<IngredientSuggestion>, FoodApiError>;

    async fn suggest_products(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ProductSuggestion>, FoodApiError>;

    async fn product_details(&self, id: &str) -> Result<ProductDetails, FoodApiError>;

    /// Get the name of the data source
    fn name(&self) -> &'static str;
}

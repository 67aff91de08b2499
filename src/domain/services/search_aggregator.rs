// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::fallback;
use crate::domain::models::product::Product;
use crate::domain::models::recipe::Recipe;
use crate::domain::models::restaurant::Restaurant;
use crate::domain::models::search_result::{Leg, LegOutcome, SearchOutcome, SearchResult};
use crate::domain::search::source::FoodDataSource;
use crate::domain::services::location::is_location_flagged;
use crate::domain::services::restaurant_policy::{self, RestaurantResolution};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term.";
pub const TOTAL_FAILURE_MESSAGE: &str = "Failed to fetch search results.";
pub const RECIPES_FAILED_WARNING: &str = "Failed to fetch recipes.";
pub const PRODUCTS_FAILED_WARNING: &str = "Failed to fetch products.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregatorError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    TotalFailure(String),
}

/// 聚合搜索器
///
/// 对同一个查询并发发起菜谱、商品、餐厅三路查找，
/// 单路失败只会降级为空结果加警告，不会影响其他分支。
pub struct SearchAggregator {
    source: Arc<dyn FoodDataSource>,
    result_limit: u32,
    restaurant_distance: u32,
}

impl SearchAggregator {
    pub fn new(source: Arc<dyn FoodDataSource>, result_limit: u32, restaurant_distance: u32) -> Self {
        Self {
            source,
            result_limit,
            restaurant_distance,
        }
    }

    pub async fn search(&self, query: &str) -> Result<SearchOutcome, AggregatorError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AggregatorError::Validation(EMPTY_QUERY_MESSAGE.to_string()));
        }
        metrics::counter!("foodie_search_requests_total").increment(1);
        info!("Searching {} for {:?}", self.source.name(), query);

        let recipes = {
            let source = self.source.clone();
            let query = query.to_string();
            let limit = self.result_limit;
            tokio::spawn(async move {
                LegOutcome::settle(Leg::Recipes, source.search_recipes(&query, limit).await)
            })
        };
        let products = {
            let source = self.source.clone();
            let query = query.to_string();
            let limit = self.result_limit;
            tokio::spawn(async move {
                LegOutcome::settle(Leg::Products, source.search_products(&query, limit).await)
            })
        };
        let restaurants = {
            let source = self.source.clone();
            let query = query.to_string();
            let distance = self.restaurant_distance;
            tokio::spawn(async move {
                LegOutcome::settle(
                    Leg::Restaurants,
                    source.search_restaurants(&query, distance).await,
                )
            })
        };

        match tokio::join!(recipes, products, restaurants) {
            (Ok(recipes), Ok(products), Ok(restaurants)) => {
                Ok(assemble(query, recipes, products, restaurants))
            }
            (recipes, products, restaurants) => {
                for join_error in [recipes.err(), products.err(), restaurants.err()]
                    .into_iter()
                    .flatten()
                {
                    error!("Search leg aborted: {}", join_error);
                }
                Err(AggregatorError::TotalFailure(
                    TOTAL_FAILURE_MESSAGE.to_string(),
                ))
            }
        }
    }
}

/// Combine three settled legs into one outcome.
///
/// Warnings are concatenated in recipe, product, restaurant order.
pub fn assemble(
    query: &str,
    recipes: LegOutcome<Recipe>,
    products: LegOutcome<Product>,
    restaurants: LegOutcome<Restaurant>,
) -> SearchOutcome {
    let mut warnings: Vec<String> = Vec::new();
    if recipes.is_failed() {
        warnings.push(RECIPES_FAILED_WARNING.to_string());
    }
    if products.is_failed() {
        warnings.push(PRODUCTS_FAILED_WARNING.to_string());
    }

    let resolution = restaurant_policy::resolve(&restaurants, is_location_flagged(query));
    if let Some(warning) = resolution.warning() {
        warnings.push(warning);
    }
    let restaurants = match resolution {
        RestaurantResolution::PassThrough => restaurants.into_items(),
        RestaurantResolution::Fallback => {
            metrics::counter!("foodie_restaurant_fallback_total").increment(1);
            fallback::restaurants().to_vec()
        }
        RestaurantResolution::Unavailable { .. } | RestaurantResolution::NotFound => Vec::new(),
    };

    SearchOutcome {
        results: SearchResult {
            recipes: recipes.into_items(),
            products: products.into_items(),
            restaurants,
        },
        warning: (!warnings.is_empty()).then(|| warnings.join(" ")),
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::product::Product;
use super::recipe::Recipe;
use super::restaurant::Restaurant;
use crate::domain::search::source::FoodApiError;

/// 聚合搜索结果
///
/// 每次搜索重新生成，整体替换上一次的结果
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub recipes: Vec<Recipe>,
    pub products: Vec<Product>,
    pub restaurants: Vec<Restaurant>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty() && self.products.is_empty() && self.restaurants.is_empty()
    }
}

/// A finished search: the combined results plus the degraded-data warning, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchOutcome {
    pub results: SearchResult,
    pub warning: Option<String>,
}

/// 搜索分支
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    Recipes,
    Products,
    Restaurants,
}

impl Leg {
    pub fn as_str(&self) -> &'static str {
        match self {
            Leg::Recipes => "recipes",
            Leg::Products => "products",
            Leg::Restaurants => "restaurants",
        }
    }
}

/// 单个分支的结算结果
///
/// 分支失败不会向上传播，而是带着失败原因变成一个空结果
#[derive(Debug, Clone, PartialEq)]
pub enum LegOutcome<T> {
    Fetched(Vec<T>),
    Failed(String),
}

impl<T> LegOutcome<T> {
    /// Absorb a fetch result, logging how the leg settled.
    pub fn settle(leg: Leg, result: Result<Vec<T>, FoodApiError>) -> Self {
        match result {
            Ok(items) => {
                info!("Leg {} returned {} results", leg.as_str(), items.len());
                LegOutcome::Fetched(items)
            }
            Err(e) => {
                warn!("Leg {} failed: {}", leg.as_str(), e);
                metrics::counter!("foodie_search_leg_failures_total", "leg" => leg.as_str())
                    .increment(1);
                LegOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LegOutcome::Failed(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            LegOutcome::Failed(reason) => Some(reason),
            LegOutcome::Fetched(_) => None,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            LegOutcome::Fetched(items) => items,
            LegOutcome::Failed(_) => Vec::new(),
        }
    }
}

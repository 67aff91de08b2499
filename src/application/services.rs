// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use crate::config::settings::Settings;
use crate::domain::search::source::FoodDataSource;
use crate::domain::services::autocomplete::{Autocomplete, DebouncedIngredientSuggestions};
use crate::domain::services::catalog::ProductCatalog;
use crate::domain::services::recipe_details::RecipeDetailsService;
use crate::domain::services::recipe_finder::RecipeFinder;
use crate::domain::services::restaurant_lookup::RestaurantLookupService;
use crate::domain::services::search_aggregator::SearchAggregator;

/// 服务集合
///
/// 所有服务共享同一个数据源，由 HTTP 层通过 `Extension` 注入
#[derive(Clone)]
pub struct Services {
    pub aggregator: Arc<SearchAggregator>,
    pub restaurant_lookup: Arc<RestaurantLookupService>,
    pub recipe_finder: Arc<RecipeFinder>,
    pub recipe_details: Arc<RecipeDetailsService>,
    pub catalog: Arc<ProductCatalog>,
    pub autocomplete: Arc<Autocomplete>,
    pub debounce: Duration,
}

impl Services {
    pub fn new(source: Arc<dyn FoodDataSource>, settings: &Settings) -> Self {
        let api = &settings.spoonacular;
        Self {
            aggregator: Arc::new(SearchAggregator::new(
                source.clone(),
                api.result_limit,
                api.restaurant_distance,
            )),
            restaurant_lookup: Arc::new(RestaurantLookupService::new(
                source.clone(),
                api.restaurant_distance,
            )),
            recipe_finder: Arc::new(RecipeFinder::new(
                source.clone(),
                settings.recipes.page_size,
            )),
            recipe_details: Arc::new(RecipeDetailsService::new(source.clone())),
            catalog: Arc::new(ProductCatalog::new(source.clone())),
            autocomplete: Arc::new(Autocomplete::new(
                source,
                settings.autocomplete.min_chars,
                settings.autocomplete.limit,
            )),
            debounce: Duration::from_millis(settings.autocomplete.debounce_ms),
        }
    }

    /// Keystroke-driven ingredient suggestions sharing this autocomplete service.
    ///
    /// Library API for embedding clients that feed raw keystrokes; the HTTP
    /// routes expose the undebounced `/v1/ingredients/suggest` instead.
    pub fn ingredient_typeahead(&self) -> DebouncedIngredientSuggestions {
        DebouncedIngredientSuggestions::new(self.autocomplete.clone(), self.debounce)
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use foodie::domain::models::ingredient::IngredientSuggestion;
use foodie::domain::models::product::{Product, ProductDetails, ProductSuggestion};
use foodie::domain::models::recipe::{
    AmountConversion, AmountConversionRequest, Recipe, RecipeInformation,
};
use foodie::domain::models::restaurant::Restaurant;
use foodie::domain::search::source::{FoodApiError, FoodDataSource};
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned responses for every food API call, with a log of the calls made.
pub struct StubFoodSource {
    pub recipes: Result<Vec<Recipe>, FoodApiError>,
    pub products: Result<Vec<Product>, FoodApiError>,
    pub restaurants: Result<Vec<Restaurant>, FoodApiError>,
    pub panic_on_restaurants: bool,
    pub recipes_by_ingredients: Result<Vec<Recipe>, FoodApiError>,
    pub information: Result<RecipeInformation, FoodApiError>,
    pub substitutes: HashMap<String, Result<Vec<String>, FoodApiError>>,
    pub conversion: Result<AmountConversion, FoodApiError>,
    pub ingredient_suggestions: Result<Vec<IngredientSuggestion>, FoodApiError>,
    pub product_suggestions: Result<Vec<ProductSuggestion>, FoodApiError>,
    pub product: Result<ProductDetails, FoodApiError>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for StubFoodSource {
    fn default() -> Self {
        Self {
            recipes: Ok(Vec::new()),
            products: Ok(Vec::new()),
            restaurants: Ok(Vec::new()),
            panic_on_restaurants: false,
            recipes_by_ingredients: Ok(Vec::new()),
            information: Ok(RecipeInformation::default()),
            substitutes: HashMap::new(),
            conversion: Ok(AmountConversion::default()),
            ingredient_suggestions: Ok(Vec::new()),
            product_suggestions: Ok(Vec::new()),
            product: Ok(ProductDetails::default()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl StubFoodSource {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn network_error() -> FoodApiError {
    FoodApiError::Network("connection refused".to_string())
}

pub fn quota_error() -> FoodApiError {
    FoodApiError::Status {
        status: 402,
        message: "Your daily points limit of 150 has been reached.".to_string(),
    }
}

#[async_trait]
impl FoodDataSource for StubFoodSource {
    async fn search_recipes(&self, query: &str, limit: u32) -> Result<Vec<Recipe>, FoodApiError> {
        self.record(format!("search_recipes:{}:{}", query, limit));
        self.recipes.clone()
    }

    async fn search_products(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Product>, FoodApiError> {
        self.record(format!("search_products:{}:{}", query, limit));
        self.products.clone()
    }

    async fn search_restaurants(
        &self,
        query: &str,
        distance: u32,
    ) -> Result<Vec<Restaurant>, FoodApiError> {
        self.record(format!("search_restaurants:{}:{}", query, distance));
        if self.panic_on_restaurants {
            panic!("restaurant leg blew up");
        }
        self.restaurants.clone()
    }

    async fn find_recipes_by_ingredients(
        &self,
        ingredients: &[String],
        number: u32,
        offset: u32,
    ) -> Result<Vec<Recipe>, FoodApiError> {
        self.record(format!(
            "find_recipes_by_ingredients:{}:{}:{}",
            ingredients.join(","),
            number,
            offset
        ));
        self.recipes_by_ingredients.clone()
    }

    async fn recipe_information(&self, id: i64) -> Result<RecipeInformation, FoodApiError> {
        self.record(format!("recipe_information:{}", id));
        self.information.clone()
    }

    async fn ingredient_substitutes(&self, ingredient: &str) -> Result<Vec<String>, FoodApiError> {
        self.record(format!("ingredient_substitutes:{}", ingredient));
        self.substitutes
            .get(ingredient)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn convert_amount(
        &self,
        request: &AmountConversionRequest,
    ) -> Result<AmountConversion, FoodApiError> {
        self.record(format!(
            "convert_amount:{}:{}:{}",
            request.ingredient_id, request.source_unit, request.target_unit
        ));
        self.conversion.clone()
    }

    async fn suggest_ingredients(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<IngredientSuggestion>, FoodApiError> {
        self.record(format!("suggest_ingredients:{}:{}", query, limit));
        self.ingredient_suggestions.clone()
    }

    async fn suggest_products(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ProductSuggestion>, FoodApiError> {
        self.record(format!("suggest_products:{}:{}", query, limit));
        self.product_suggestions.clone()
    }

    async fn product_details(&self, id: &str) -> Result<ProductDetails, FoodApiError> {
        self.record(format!("product_details:{}", id));
        self.product.clone()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::settings::SpoonacularSettings;
use crate::domain::models::ingredient::IngredientSuggestion;
use crate::domain::models::product::{Product, ProductDetails, ProductSuggestion};
use crate::domain::models::recipe::{
    AmountConversion, AmountConversionRequest, Recipe, RecipeInformation,
};
use crate::domain::models::restaurant::{Restaurant, RestaurantSource};
use crate::domain::search::source::{FoodApiError, FoodDataSource};

#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    #[serde(default)]
    results: Vec<Recipe>,
}

#[derive(Debug, Deserialize)]
struct ProductSearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct RestaurantSearchResponse {
    #[serde(default)]
    restaurants: Vec<ApiRestaurant>,
}

#[derive(Debug, Deserialize)]
struct ApiRestaurant {
    name: String,
    #[serde(default)]
    address: Option<ApiAddress>,
    #[serde(default)]
    weighted_rating_value: Option<f64>,
    #[serde(default)]
    cuisines: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiAddress {
    #[serde(default)]
    street_addr: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl From<ApiRestaurant> for Restaurant {
    fn from(api: ApiRestaurant) -> Self {
        let address = api.address.unwrap_or_default();
        let display = [
            address.street_addr.as_deref(),
            address.city.as_deref(),
            address.state.as_deref(),
            address.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

        Restaurant {
            name: api.name,
            address: display,
            rating: api.weighted_rating_value,
            cuisines: api.cuisines,
            city: address.city,
            source: RestaurantSource::Live,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SuggestionResponse<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct SubstitutesResponse {
    #[serde(default)]
    substitutes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ConversionResponse {
    target: AmountConversion,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Spoonacular 食品数据 API 客户端
///
/// 所有请求都带上 `apiKey` 查询参数；非 2xx 响应转换为
/// `FoodApiError::Status`，并尽量保留 API 返回的 `message`。
pub struct SpoonacularClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl SpoonacularClient {
    pub fn new(settings: &SpoonacularSettings) -> Result<Self, FoodApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("foodie/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| FoodApiError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let mut base = settings.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| FoodApiError::Other(format!("Invalid base URL {}: {}", base, e)))?;

        Ok(Self {
            client,
            base_url,
            api_key: settings.api_key.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, FoodApiError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| FoodApiError::Other(format!("Invalid path {}: {}", path, e)))?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| FoodApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_default();
            return Err(FoodApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FoodApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FoodDataSource for SpoonacularClient {
    async fn search_recipes(&self, query: &str, limit: u32) -> Result<Vec<Recipe>, FoodApiError> {
        let response: ComplexSearchResponse = self
            .get_json(
                "recipes/complexSearch",
                &[("query", query.to_string()), ("number", limit.to_string())],
            )
            .await?;
        Ok(response.results)
    }

    async fn search_products(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Product>, FoodApiError> {
        let response: ProductSearchResponse = self
            .get_json(
                "food/products/search",
                &[("query", query.to_string()), ("number", limit.to_string())],
            )
            .await?;
        Ok(response.products)
    }

    async fn search_restaurants(
        &self,
        query: &str,
        distance: u32,
    ) -> Result<Vec<Restaurant>, FoodApiError> {
        let response: RestaurantSearchResponse = self
            .get_json(
                "food/restaurants/search",
                &[("query", query.to_string()), ("distance", distance.to_string())],
            )
            .await?;
        Ok(response.restaurants.into_iter().map(Restaurant::from).collect())
    }

    async fn find_recipes_by_ingredients(
        &self,
        ingredients: &[String],
        number: u32,
        offset: u32,
    ) -> Result<Vec<Recipe>, FoodApiError> {
        self.get_json(
            "recipes/findByIngredients",
            &[
                ("ingredients", ingredients.join(",")),
                ("number", number.to_string()),
                ("offset", offset.to_string()),
                ("ranking", "1".to_string()),
            ],
        )
        .await
    }

    async fn recipe_information(&self, id: i64) -> Result<RecipeInformation, FoodApiError> {
        self.get_json(&format!("recipes/{}/information", id), &[])
            .await
    }

    async fn ingredient_substitutes(&self, ingredient: &str) -> Result<Vec<String>, FoodApiError> {
        let response: SubstitutesResponse = self
            .get_json(
                "food/ingredients/substitutes",
                &[("ingredientName", ingredient.to_string())],
            )
            .await?;
        Ok(response.substitutes)
    }

    async fn convert_amount(
        &self,
        request: &AmountConversionRequest,
    ) -> Result<AmountConversion, FoodApiError> {
        let response: ConversionResponse = self
            .get_json(
                &format!("food/ingredients/{}/amount", request.ingredient_id),
                &[
                    ("sourceAmount", request.source_amount.to_string()),
                    ("sourceUnit", request.source_unit.clone()),
                    ("targetUnit", request.target_unit.clone()),
                ],
            )
            .await?;
        Ok(response.target)
    }

    async fn suggest_ingredients(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<IngredientSuggestion>, FoodApiError> {
        let response: SuggestionResponse<IngredientSuggestion> = self
            .get_json(
                "food/ingredients/search",
                &[("query", query.to_string()), ("number", limit.to_string())],
            )
            .await?;
        Ok(response.results)
    }

    async fn suggest_products(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ProductSuggestion>, FoodApiError> {
        let response: SuggestionResponse<ProductSuggestion> = self
            .get_json(
                "food/products/suggest",
                &[("query", query.to_string()), ("number", limit.to_string())],
            )
            .await?;
        Ok(response.results)
    }

    async fn product_details(&self, id: &str) -> Result<ProductDetails, FoodApiError> {
        let id = urlencoding_segment(id);
        self.get_json(&format!("food/products/{}", id), &[]).await
    }

    fn name(&self) -> &'static str {
        "spoonacular"
    }
}

/// Percent-encode a single path segment.
fn urlencoding_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

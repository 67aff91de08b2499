// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Spoonacular 客户端测试
///
/// 使用 wiremock 模拟上游 API，校验请求参数和响应映射

#[cfg(test)]
mod tests {
    use foodie::config::settings::SpoonacularSettings;
    use foodie::domain::models::recipe::AmountConversionRequest;
    use foodie::domain::search::source::{FoodApiError, FoodDataSource};
    use foodie::infrastructure::spoonacular::SpoonacularClient;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> SpoonacularClient {
        SpoonacularClient::new(&SpoonacularSettings {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_recipes_sends_query_limit_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/complexSearch"))
            .and(query_param("query", "jollof rice"))
            .and(query_param("number", "5"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "id": 1, "title": "Jollof Rice", "image": "https://img/1.jpg" }
                ],
                "totalResults": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let recipes = client_for(&server)
            .await
            .search_recipes("jollof rice", 5)
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Jollof Rice");
        assert_eq!(recipes[0].image.as_deref(), Some("https://img/1.jpg"));
    }

    #[tokio::test]
    async fn test_search_products_reads_products_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/products/search"))
            .and(query_param("query", "rice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "products": [ { "id": 9, "title": "Basmati Rice" } ]
            })))
            .mount(&server)
            .await;

        let products = client_for(&server)
            .await
            .search_products("rice", 5)
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 9);
    }

    #[tokio::test]
    async fn test_search_restaurants_maps_address() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/restaurants/search"))
            .and(query_param("query", "pizza"))
            .and(query_param("distance", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "restaurants": [{
                    "name": "Slice House",
                    "address": {
                        "street_addr": "22 Oak Ave",
                        "city": "Springfield",
                        "state": "IL",
                        "country": "US"
                    },
                    "weighted_rating_value": 4.5,
                    "cuisines": ["Pizza"]
                }]
            })))
            .mount(&server)
            .await;

        let restaurants = client_for(&server)
            .await
            .search_restaurants("pizza", 5)
            .await
            .unwrap();

        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].address, "22 Oak Ave, Springfield, IL, US");
        assert_eq!(restaurants[0].rating, Some(4.5));
        assert!(!restaurants[0].is_sample());
    }

    #[tokio::test]
    async fn test_find_by_ingredients_sends_paging_and_ranking() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/findByIngredients"))
            .and(query_param("ingredients", "tomato,pasta"))
            .and(query_param("number", "10"))
            .and(query_param("offset", "20"))
            .and(query_param("ranking", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 3,
                "title": "Tomato Pasta",
                "usedIngredients": [ { "id": 11, "name": "tomato" } ],
                "missedIngredients": [ { "id": 12, "name": "basil" } ]
            }])))
            .mount(&server)
            .await;

        let recipes = client_for(&server)
            .await
            .find_recipes_by_ingredients(&["tomato".to_string(), "pasta".to_string()], 10, 20)
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].missed_ingredient_names(), vec!["basil".to_string()]);
    }

    #[tokio::test]
    async fn test_convert_amount_reads_target() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/ingredients/9/amount"))
            .and(query_param("sourceAmount", "2.5"))
            .and(query_param("sourceUnit", "cups"))
            .and(query_param("targetUnit", "grams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sourceAmount": 2.5,
                "sourceUnit": "cups",
                "targetAmount": 312.5,
                "targetUnit": "grams",
                "answer": "2.5 cups flour translates to 312.5 grams.",
                "type": "CONVERSION",
                "target": { "amount": 312.5, "unit": "grams" }
            })))
            .mount(&server)
            .await;

        let conversion = client_for(&server)
            .await
            .convert_amount(&AmountConversionRequest {
                ingredient_id: 9,
                source_amount: 2.5,
                source_unit: "cups".to_string(),
                target_unit: "grams".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(conversion.unit, "grams");
        assert!((conversion.amount - 312.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_substitutes_missing_field_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/ingredients/substitutes"))
            .and(query_param("ingredientName", "saffron"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "failure",
                "message": "Could not find any substitutes for that ingredient."
            })))
            .mount(&server)
            .await;

        let substitutes = client_for(&server)
            .await
            .ingredient_substitutes("saffron")
            .await
            .unwrap();

        assert!(substitutes.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_carries_api_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/products/suggest"))
            .respond_with(ResponseTemplate::new(402).set_body_json(json!({
                "status": "failure",
                "code": 402,
                "message": "Your daily points limit of 150 has been reached."
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .suggest_products("pea", 5)
            .await
            .unwrap_err();

        assert_eq!(
            err.api_message(),
            Some("Your daily points limit of 150 has been reached.")
        );
        assert!(matches!(err, FoodApiError::Status { status: 402, .. }));
    }

    #[tokio::test]
    async fn test_error_status_without_body_has_no_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/42/information"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .recipe_information(42)
            .await
            .unwrap_err();

        assert_eq!(err.api_message(), None);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/ingredients/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .suggest_ingredients("tom", 5)
            .await
            .unwrap_err();

        assert!(matches!(err, FoodApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_product_details_uses_id_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/products/22347"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 22347,
                "title": "Peanut Butter",
                "brand": "Acme",
                "price": 3.99,
                "nutrition": { "calories": 190.0 }
            })))
            .mount(&server)
            .await;

        let product = client_for(&server)
            .await
            .product_details("22347")
            .await
            .unwrap();

        assert_eq!(product.title, "Peanut Butter");
        assert_eq!(product.brand.as_deref(), Some("Acme"));
    }
}

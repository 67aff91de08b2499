// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::services::Services;
use crate::presentation::handlers::{
    ingredient_handler, product_handler, recipe_handler, restaurant_handler, search_handler,
};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由，服务需要通过 `Extension` 提供
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route("/v1/search", post(search_handler::search))
        .route("/v1/recipes/find", post(recipe_handler::find_recipes))
        .route("/v1/recipes/{id}", get(recipe_handler::recipe_details))
        .route(
            "/v1/ingredients/suggest",
            get(ingredient_handler::suggest_ingredients),
        )
        .route(
            "/v1/ingredients/{id}/convert",
            get(recipe_handler::convert_amount),
        )
        .route("/v1/products/suggest", get(product_handler::suggest_products))
        .route("/v1/products/{id}", get(product_handler::product_details))
        .route(
            "/v1/restaurants/search",
            post(restaurant_handler::search_restaurants),
        );

    Router::new().merge(public_routes).merge(api_routes)
}

/// 创建带有全部服务的应用
pub fn app(services: Services) -> Router {
    routes()
        .layer(Extension(services.aggregator))
        .layer(Extension(services.restaurant_lookup))
        .layer(Extension(services.recipe_finder))
        .layer(Extension(services.recipe_details))
        .layer(Extension(services.catalog))
        .layer(Extension(services.autocomplete))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Path, Query};
use std::sync::Arc;

use crate::{
    application::dto::suggestion_request::SuggestQuery,
    domain::models::product::{ProductDetails, ProductSuggestion},
    domain::services::autocomplete::{Autocomplete, Suggestions},
    domain::services::catalog::ProductCatalog,
    presentation::errors::AppError,
};

pub async fn suggest_products(
    Extension(autocomplete): Extension<Arc<Autocomplete>>,
    Query(query): Query<SuggestQuery>,
) -> Json<Suggestions<ProductSuggestion>> {
    Json(autocomplete.suggest_products(&query.q).await)
}

pub async fn product_details(
    Extension(catalog): Extension<Arc<ProductCatalog>>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetails>, AppError> {
    let product = catalog.product_details(&id).await?;
    Ok(Json(product))
}

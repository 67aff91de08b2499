// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::recipe_request::{
        ConvertAmountQuery, FindRecipesRequestDto, RecipeDetailsQuery,
    },
    domain::models::recipe::{AmountConversion, RecipeDetails},
    domain::services::recipe_details::RecipeDetailsService,
    domain::services::recipe_finder::{RecipeFinder, RecipeFinderError},
    presentation::errors::AppError,
};

/// 按储藏室食材查找菜谱
pub async fn find_recipes(
    Extension(finder): Extension<Arc<RecipeFinder>>,
    Json(payload): Json<FindRecipesRequestDto>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response();
    }

    match finder.find(&payload.into_query()).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

pub async fn recipe_details(
    Extension(service): Extension<Arc<RecipeDetailsService>>,
    Path(id): Path<i64>,
    Query(query): Query<RecipeDetailsQuery>,
) -> Result<Json<RecipeDetails>, AppError> {
    let details = service.details(id, &query.missed_ingredients()).await?;
    Ok(Json(details))
}

pub async fn convert_amount(
    Extension(service): Extension<Arc<RecipeDetailsService>>,
    Path(ingredient_id): Path<i64>,
    Query(query): Query<ConvertAmountQuery>,
) -> Result<Json<AmountConversion>, AppError> {
    query.validate()?;
    let conversion = service
        .convert_amount(&query.into_request(ingredient_id))
        .await?;
    Ok(Json(conversion))
}

impl From<RecipeFinderError> for (StatusCode, String) {
    fn from(err: RecipeFinderError) -> Self {
        match err {
            RecipeFinderError::Validation(details) => (StatusCode::BAD_REQUEST, details),
        }
    }
}

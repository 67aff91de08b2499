// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::restaurant_request::RestaurantSearchRequestDto,
    domain::services::restaurant_lookup::{LookupError, RestaurantLookupService},
};

/// 按地点查找餐厅
pub async fn search_restaurants(
    Extension(lookup): Extension<Arc<RestaurantLookupService>>,
    Json(payload): Json<RestaurantSearchRequestDto>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response();
    }

    match lookup.lookup(&payload.location).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<LookupError> for (StatusCode, String) {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::Validation(details) => (StatusCode::BAD_REQUEST, details),
            LookupError::Upstream(details) => (StatusCode::BAD_GATEWAY, details),
        }
    }
}

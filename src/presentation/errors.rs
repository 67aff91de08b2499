// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::services::catalog::CatalogError;
use crate::domain::services::recipe_details::RecipeDetailsError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<validator::ValidationErrors>().is_some() {
            return StatusCode::BAD_REQUEST;
        }
        if let Some(e) = self.0.downcast_ref::<CatalogError>() {
            return match e {
                CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
                CatalogError::Upstream(_) => StatusCode::BAD_GATEWAY,
            };
        }
        if let Some(e) = self.0.downcast_ref::<RecipeDetailsError>() {
            return match e {
                RecipeDetailsError::Validation(_) => StatusCode::BAD_REQUEST,
                RecipeDetailsError::Upstream(_) => StatusCode::BAD_GATEWAY,
            };
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

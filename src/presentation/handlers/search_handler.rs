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
    application::dto::search_request::{SearchRequestDto, SearchResponseDto},
    domain::services::search_aggregator::{AggregatorError, SearchAggregator},
};

/// 处理聚合搜索请求
///
/// # 参数
///
/// * `aggregator` - 搜索聚合器
/// * `payload` - 搜索请求数据
///
/// # 返回值
///
/// 成功时返回三类结果以及可选的降级警告；
/// 整体失败时三类结果全部清空，只返回一条错误信息
pub async fn search(
    Extension(aggregator): Extension<Arc<SearchAggregator>>,
    Json(payload): Json<SearchRequestDto>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response();
    }

    let query = payload.query.trim().to_string();
    match aggregator.search(&query).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(SearchResponseDto::from_outcome(query, outcome)),
        )
            .into_response(),
        Err(AggregatorError::Validation(msg)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
        }
        Err(AggregatorError::TotalFailure(msg)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SearchResponseDto::failed(query, msg)),
        )
            .into_response(),
    }
}

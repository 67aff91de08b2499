// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;

use crate::{
    application::dto::suggestion_request::SuggestQuery,
    domain::services::autocomplete::{Autocomplete, Suggestions},
};

pub async fn suggest_ingredients(
    Extension(autocomplete): Extension<Arc<Autocomplete>>,
    Query(query): Query<SuggestQuery>,
) -> Json<Suggestions<String>> {
    Json(autocomplete.suggest_ingredients(&query.q).await)
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Autocomplete entry returned by `/food/ingredients/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IngredientSuggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

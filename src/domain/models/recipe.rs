// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 菜谱摘要
///
/// 食品数据 API 返回的菜谱条目。文本搜索只填充 `id` 与 `title`，
/// 按食材查找时还会带上已有/缺少的食材列表。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// 菜谱ID
    pub id: i64,
    /// 显示标题
    pub title: String,
    /// 图片URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// 准备时间（分钟）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    /// 饮食标签，例如 vegetarian
    #[serde(default)]
    pub diets: Vec<String>,
    /// 菜系
    #[serde(default)]
    pub cuisines: Vec<String>,
    /// 储藏室中已有的食材
    #[serde(default)]
    pub used_ingredients: Vec<IngredientRef>,
    /// 缺少的食材
    #[serde(default)]
    pub missed_ingredients: Vec<IngredientRef>,
}

impl Recipe {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn missed_ingredient_names(&self) -> Vec<String> {
        self.missed_ingredients
            .iter()
            .map(|ingredient| ingredient.name.clone())
            .collect()
    }
}

/// Ingredient as referenced from a recipe summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IngredientRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl IngredientRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// 菜谱详情
///
/// 对应 `/recipes/{id}/information` 的响应
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(default)]
    pub analyzed_instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtendedIngredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aisle: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Instruction {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InstructionStep {
    pub number: u32,
    pub step: String,
}

/// 菜谱详情与缺失食材的替代品
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeDetails {
    pub information: RecipeInformation,
    /// 缺失食材名 -> 替代品列表
    pub substitutes: BTreeMap<String, Vec<String>>,
}

/// 单位换算请求
#[derive(Debug, Clone, PartialEq)]
pub struct AmountConversionRequest {
    pub ingredient_id: i64,
    pub source_amount: f64,
    pub source_unit: String,
    pub target_unit: String,
}

/// 单位换算结果
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AmountConversion {
    pub amount: f64,
    pub unit: String,
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 餐厅数据来源
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RestaurantSource {
    /// 来自食品数据 API
    #[default]
    Live,
    /// 来自内置的备用目录
    Sample,
}

/// 餐厅
///
/// 既可以来自 API，也可以来自备用目录。
/// 同一次搜索返回的餐厅来源总是一致的。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    /// 名称
    pub name: String,
    /// 单行显示地址
    pub address: String,
    /// 评分
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// 菜系
    #[serde(default)]
    pub cuisines: Vec<String>,
    /// 城市标签，用于备用目录的城市匹配
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// 数据来源
    #[serde(default)]
    pub source: RestaurantSource,
}

impl Restaurant {
    pub fn live(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            rating: None,
            cuisines: Vec::new(),
            city: None,
            source: RestaurantSource::Live,
        }
    }

    pub fn is_sample(&self) -> bool {
        self.source == RestaurantSource::Sample
    }
}

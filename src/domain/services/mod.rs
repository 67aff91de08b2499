// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 搜索聚合（search_aggregator）：菜谱/商品/餐厅三路并发搜索
/// - 餐厅降级策略（restaurant_policy）与地区识别（location）
/// - 餐厅查找（restaurant_lookup）、菜谱查找（recipe_finder）
/// - 菜谱详情（recipe_details）、商品目录（catalog）
/// - 自动补全（autocomplete）
pub mod autocomplete;
pub mod catalog;
pub mod location;
pub mod recipe_details;
pub mod recipe_finder;
pub mod restaurant_lookup;
pub mod restaurant_policy;
pub mod search_aggregator;

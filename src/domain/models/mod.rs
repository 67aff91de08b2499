// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 菜谱（recipe）：菜谱摘要、详情与单位换算
/// - 包装食品（product）：商品摘要、建议与详情
/// - 餐厅（restaurant）：API 或备用目录中的餐厅
/// - 食材（ingredient）：食材自动补全条目
/// - 储藏室（pantry）：用户当前拥有的食材
/// - 收藏夹（favorites）：用户收藏的菜谱
/// - 搜索结果（search_result）：聚合搜索的结果与分支结算
pub mod favorites;
pub mod ingredient;
pub mod pantry;
pub mod product;
pub mod recipe;
pub mod restaurant;
pub mod search_result;

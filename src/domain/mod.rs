// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：菜谱、商品、餐厅等数据结构
/// - 备用数据（fallback）：API 不可用时展示的内置样例
/// - 数据源接口（search）：外部食品数据 API 的抽象
/// - 服务（services）：搜索聚合、菜谱查找等业务规则
///
/// 领域层不依赖于任何外部实现，
/// 体现了纯粹的业务逻辑和业务规则。
pub mod fallback;
pub mod models;
pub mod search;
pub mod services;

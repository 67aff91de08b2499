// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供对外部系统的具体实现：
/// - 指标（metrics）：Prometheus 指标导出
/// - Spoonacular（spoonacular）：食品数据 API 的 HTTP 客户端
///
/// 基础设施层依赖于领域层的抽象接口，
/// 确保领域层保持纯粹的业务逻辑。
pub mod metrics;
pub mod spoonacular;

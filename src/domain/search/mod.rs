// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据源领域模块
///
/// 定义外部食品数据 API 的接口与错误类型
pub mod source;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 指标（metrics）：Prometheus 指标导出
/// - 搜索（search）：搜索引擎HTTP客户端
pub mod metrics;
pub mod search;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含门面的核心逻辑，包括：
/// - 领域模型（models）：搜索意图、分页窗口和响应信封
/// - 搜索（search）：引擎接口与查询文档构建
/// - 服务（services）：门面服务与响应规整
///
/// 领域层不依赖任何具体的引擎实现。
pub mod models;
pub mod search;
pub mod services;

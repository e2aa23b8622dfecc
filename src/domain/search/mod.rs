// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义搜索引擎接口、查询文档结构以及从意图到引擎请求的转换
pub mod engine;
pub mod query;
pub mod query_builder;

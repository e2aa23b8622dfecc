// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索引擎客户端模块
pub mod elasticsearch;

pub use elasticsearch::ElasticsearchClient;

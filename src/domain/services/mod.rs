// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 门面服务（facade_service）：构建查询、调用引擎、规整响应
/// - 规整（normalizer）：把引擎原始响应转换为统一信封
/// - 错误（errors）：门面层错误分类
pub mod errors;
pub mod facade_service;
pub mod normalizer;

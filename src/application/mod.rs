// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 将HTTP层收集的原始参数解释为搜索意图
pub mod dto;
pub mod interpreter;

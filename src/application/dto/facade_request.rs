// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// 查询字符串参数
///
/// 所有字段按原始字符串接收，由请求解释器负责归一化
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FacadeQueryParams {
    /// 全文查询词
    pub q: Option<String>,
    /// 分类过滤
    pub c: Option<String>,
    /// 页码
    pub page: Option<String>,
}

/// 新建文档请求DTO
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateDocumentDto {
    /// 目标索引
    #[serde(default)]
    #[validate(length(min = 1, message = "index is required"))]
    pub index: String,

    /// 文档内容
    #[serde(default)]
    pub doc: Value,
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::EngineError;
use thiserror::Error;

/// 门面服务错误类型
#[derive(Error, Debug, Clone)]
pub enum FacadeError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Unexpected search engine response shape: {0}")]
    Shape(String),
}

impl FacadeError {
    /// 错误类别，用于日志与指标
    pub fn kind(&self) -> &'static str {
        match self {
            FacadeError::Validation(_) => "validation_error",
            FacadeError::Engine(EngineError::Unavailable(_)) => "engine_unavailable",
            FacadeError::Engine(EngineError::Rejected { .. }) => "engine_error",
            FacadeError::Engine(EngineError::InvalidBody(_)) | FacadeError::Shape(_) => {
                "shape_error"
            }
        }
    }
}

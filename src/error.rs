//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 单个产品问题生成失败
    #[error("Failed to generate questions: {0}")]
    Generation(String),

    /// 批量生成失败
    #[error("Batch generation failed: {0}")]
    BatchGeneration(String),

    /// 问题校验失败
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 请求参数错误
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),
}

impl AppError {
    /// 错误类别，写入响应体的 error 字段
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Generation(_) => "generation failed",
            AppError::BatchGeneration(_) => "batch generation failed",
            AppError::Validation(_) => "validation failed",
            AppError::BadRequest(_) => "bad request",
            AppError::Config(_) => "config error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.kind(),
            "message": self.to_string()
        }));

        (self.status(), body).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;

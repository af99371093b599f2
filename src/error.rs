use crate::models::ApiError;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// 系统安全随机源不可用，抽奖必须失败而不能降级
    #[error("Secure random source unavailable: {0}")]
    RandomUnavailable(String),

    /// 抽奖结果未通过公平性校验（重复中奖 / 不在名单中）
    #[error("Invalid draw result: {0}")]
    InvalidResult(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::NotFound(msg) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg.clone(),
            ),
            AppError::InvalidResult(msg) => {
                log::warn!("Draw result rejected: {msg}");
                (
                    actix_web::http::StatusCode::CONFLICT,
                    "INVALID_RESULT",
                    msg.clone(),
                )
            }
            AppError::RandomUnavailable(msg) => {
                log::error!("Secure random source unavailable: {msg}");
                (
                    actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                    "RANDOM_UNAVAILABLE",
                    "Secure random source unavailable".to_string(),
                )
            }
            AppError::StorageError(msg) => {
                log::error!("Storage error: {msg}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Storage error".to_string(),
                )
            }
            AppError::SerdeJsonError(err) => {
                log::warn!("JSON error: {err}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "JSON_ERROR",
                    err.to_string(),
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let error = ApiError {
            code: error_code.to_string(),
            message,
        };
        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": error
        }))
    }
}

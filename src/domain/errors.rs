//! Error/Response Model - 错误码与统一错误信封
//!
//! 所有 handler 共享的词汇表：
//! - `ErrorCode`: 封闭的错误码集合
//! - `ErrorEnvelope`: `{ code, message }`
//! - `ErrorBody`: `{ error: ErrorEnvelope }`，所有错误响应的 body

use std::fmt;

use serde::{Deserialize, Serialize};

/// API 错误码
///
/// 客户端应只根据 `code` 分支，不要依赖 `message` 文本。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// 能力尚未实现
    NotImplemented,
    /// 输入无效（保留，当前不可达）
    InvalidInput,
    /// 内部错误
    InternalError,
    /// 路由不存在
    NotFound,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 4] = [
        ErrorCode::NotImplemented,
        ErrorCode::InvalidInput,
        ErrorCode::InternalError,
        ErrorCode::NotFound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotImplemented => "NOT_IMPLEMENTED",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 错误信封
///
/// 每次失败请求新建，构造后不再修改。`message` 不做校验，
/// 调用方负责保证其可读且不包含任何请求数据。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: ErrorCode,
    pub message: String,
}

/// 错误响应 body: `{ "error": { "code": ..., "message": ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorEnvelope,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: make_error(code, message),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.error.code
    }
}

impl From<ErrorEnvelope> for ErrorBody {
    fn from(error: ErrorEnvelope) -> Self {
        Self { error }
    }
}

/// 创建错误信封
pub fn make_error(code: ErrorCode, message: impl Into<String>) -> ErrorEnvelope {
    ErrorEnvelope {
        code,
        message: message.into(),
    }
}

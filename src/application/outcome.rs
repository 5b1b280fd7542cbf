//! Handler 结果
//!
//! HTTP 状态码由 handler 自己的结果决定，而不是由 dispatcher 根据 method 推断。

use http::StatusCode;
use serde_json::Value;

use crate::domain::{ErrorBody, ErrorCode};

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred.";

/// Handler 返回值
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutcome {
    /// 成功，payload 原样序列化为 body，状态码 200
    Success(Value),
    /// 失败，body 为错误信封
    Failure { status: StatusCode, body: ErrorBody },
}

impl HandlerOutcome {
    /// 从可序列化的 payload 创建成功结果
    ///
    /// payload 无法序列化时退化为 500 + INTERNAL_ERROR。
    pub fn success<T: serde::Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(value) => Self::Success(value),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize handler payload");
                Self::internal_error()
            }
        }
    }

    pub fn failure(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Failure {
            status,
            body: ErrorBody::new(code, message),
        }
    }

    /// 501，body 为占位 handler 的错误信封
    pub fn not_implemented(body: ErrorBody) -> Self {
        Self::Failure {
            status: StatusCode::NOT_IMPLEMENTED,
            body,
        }
    }

    /// 500 + INTERNAL_ERROR，消息固定，不包含任何请求内容
    pub fn internal_error() -> Self {
        Self::failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalError,
            INTERNAL_ERROR_MESSAGE,
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success(_) => StatusCode::OK,
            Self::Failure { status, .. } => *status,
        }
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Success(_) => None,
            Self::Failure { body, .. } => Some(body.code()),
        }
    }
}

/// 路由 handler：零参数、同步、不读取请求
pub type RouteHandler = fn() -> HandlerOutcome;

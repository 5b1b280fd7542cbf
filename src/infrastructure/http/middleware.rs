//! HTTP Middleware
//!
//! HTTP 状态码错误日志中间件

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};

/// HTTP 状态码错误日志中间件
///
/// 4xx 记 warn，5xx 记 error。501 是占位端点的正常响应，只记 debug。
/// 只记录 method 和状态码，不记录 URI、header 或 body。
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status == StatusCode::NOT_IMPLEMENTED {
        tracing::debug!(
            method = %method,
            status = %status.as_u16(),
            "HTTP endpoint not implemented"
        );
    } else if status.is_server_error() {
        tracing::error!(
            method = %method,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

//! Dispatcher
//!
//! 将入站 (method, path) 映射到唯一 handler，执行并包装为传输层响应。
//! dispatcher 本身从不失败：未匹配路由返回 404，handler panic 返回 500。

use std::panic;

use http::StatusCode;

use super::route_table::{RouteKey, RouteTable};
use super::types::{GatewayRequest, GatewayResponse};
use crate::application::HandlerOutcome;
use crate::domain::{ErrorBody, ErrorCode};

pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found.";

/// 序列化失败时使用的兜底 body
const INTERNAL_ERROR_BODY: &str =
    r#"{"error":{"code":"INTERNAL_ERROR","message":"An internal error occurred."}}"#;

/// 请求分发器
#[derive(Debug, Clone)]
pub struct Dispatcher {
    routes: RouteTable,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(RouteTable::v1())
    }
}

impl Dispatcher {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// 分发请求
    pub fn dispatch(&self, request: &GatewayRequest) -> GatewayResponse {
        let outcome = self.resolve(request);
        Self::into_response(outcome)
    }

    /// 查找并执行 handler，返回其结果
    pub fn resolve(&self, request: &GatewayRequest) -> HandlerOutcome {
        let key = RouteKey::new(&request.http_method, &request.path);

        let Some(route) = self.routes.get(&key) else {
            // path 不写入日志；4xx 由 HTTP 中间件按 warn 记录
            tracing::debug!(method = %request.http_method, "Route not found");
            return HandlerOutcome::Failure {
                status: StatusCode::NOT_FOUND,
                body: ErrorBody::new(ErrorCode::NotFound, ROUTE_NOT_FOUND_MESSAGE),
            };
        };

        let handler = route.handler;
        let outcome = match panic::catch_unwind(handler) {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::error!(route = %key, "Handler panicked");
                HandlerOutcome::internal_error()
            }
        };

        tracing::debug!(
            route = %key,
            status = outcome.status().as_u16(),
            code = ?outcome.error_code(),
            "Request dispatched"
        );

        outcome
    }

    fn into_response(outcome: HandlerOutcome) -> GatewayResponse {
        let status = outcome.status();
        let serialized = match &outcome {
            HandlerOutcome::Success(payload) => serde_json::to_string(payload),
            HandlerOutcome::Failure { body, .. } => serde_json::to_string(body),
        };

        match serialized {
            Ok(body) => GatewayResponse::json(status, body),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                GatewayResponse::json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_BODY.to_string(),
                )
            }
        }
    }
}

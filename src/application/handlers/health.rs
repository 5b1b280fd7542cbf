//! Health Handler
//!
//! 成功路径 handler 的模板：总是成功，输出形状固定

use crate::application::outcome::HandlerOutcome;
use crate::domain::HealthResponse;

/// 对外 API 版本
pub const API_VERSION: &str = "v1";

/// 健康检查，纯函数，无副作用
pub fn handle_health() -> HealthResponse {
    HealthResponse::ok(API_VERSION)
}

/// GET /v1/health
pub fn get_health() -> HandlerOutcome {
    HandlerOutcome::success(&handle_health())
}

//! HTTP Routes
//!
//! API Endpoints（由静态路由表决定，axum 只负责转发）:
//! - /v1/health                    GET   健康检查
//! - /v1/pii/detect                POST  PII 检测（未实现，501）
//! - /v1/pii/anonymize             POST  PII 匿名化（未实现，501）
//! - /v1/pii/detect-and-anonymize  POST  检测并匿名化（未实现，501）
//!
//! 其余任何 method + path 组合返回 404。

use axum::Router;
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
///
/// 不在 axum 层注册具体路由，全部请求经 fallback 进入 dispatcher，
/// 因此不会出现 axum 自己的 404/405 响应。
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().fallback(handlers::dispatch)
}

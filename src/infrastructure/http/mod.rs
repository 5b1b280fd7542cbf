//! HTTP Layer - axum 适配层
//!
//! 把 HTTP 请求转换为 `GatewayRequest`，把 `GatewayResponse` 转换回 HTTP 响应

pub mod handlers;
#[cfg(test)]
mod log_capture;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;

//! Gateway Handler
//!
//! 所有 HTTP 请求的唯一入口：只取 method 和 path 构造 `GatewayRequest`，
//! 交给 dispatcher 处理。请求 body 从不提取。

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, Uri},
};

use crate::infrastructure::gateway::{GatewayRequest, GatewayResponse};
use crate::infrastructure::http::state::AppState;

pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> GatewayResponse {
    let request = GatewayRequest::new(method.as_str(), uri.path());
    state.dispatcher.dispatch(&request)
}

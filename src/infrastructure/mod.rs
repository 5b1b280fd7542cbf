//! Infrastructure Layer - 基础设施层
//!
//! 路由分发与 HTTP 传输适配

pub mod gateway;
pub mod http;

pub use self::gateway::{Dispatcher, GatewayRequest, GatewayResponse, RouteTable};
pub use self::http::{AppState, HttpServer};

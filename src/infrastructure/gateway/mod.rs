//! Gateway - 与传输层无关的路由分发
//!
//! 入站 `GatewayRequest` → 查静态路由表 → 同步执行 handler → `GatewayResponse`

pub mod dispatcher;
pub mod route_table;
pub mod types;

pub use dispatcher::{Dispatcher, ROUTE_NOT_FOUND_MESSAGE};
pub use route_table::{Route, RouteKey, RouteTable};
pub use types::{GatewayRequest, GatewayResponse};

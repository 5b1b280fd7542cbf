//! pii-gateway - PII 检测与匿名化服务的 REST API 骨架
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - 错误码、错误信封、health 响应
//!
//! 应用层 (application/):
//! - Handlers: 每个端点一个纯函数
//! - Outcome: handler 结果，携带自己的状态码
//!
//! 基础设施层 (infrastructure/):
//! - Gateway: 静态路由表 + dispatcher，与传输层无关
//! - HTTP: axum 适配层
//!
//! 任何层都不读取、记录或回显请求 body。

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use infrastructure::gateway::{Dispatcher, GatewayRequest, GatewayResponse, RouteTable};

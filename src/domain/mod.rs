//! Domain Layer - 领域层
//!
//! 错误码、错误信封与 health 响应，供所有 handler 共享

pub mod errors;
pub mod health;

pub use errors::{make_error, ErrorBody, ErrorCode, ErrorEnvelope};
pub use health::{HealthResponse, HealthStatus};

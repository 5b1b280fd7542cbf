//! 应用层
//!
//! 包含：
//! - handlers: 各端点的纯函数 handler
//! - outcome: handler 结果（成功 payload 或带状态码的错误信封）

pub mod handlers;
pub mod outcome;

pub use handlers::{
    get_health, handle_health, handle_pii_anonymize, handle_pii_detect,
    handle_pii_detect_and_anonymize, pii_anonymize, pii_detect, pii_detect_and_anonymize,
    API_VERSION,
};
pub use outcome::{HandlerOutcome, RouteHandler, INTERNAL_ERROR_MESSAGE};

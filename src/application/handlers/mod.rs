//! Route Handlers
//!
//! 每个逻辑端点一个纯函数，不做 I/O，不读取请求，不保留任何数据

mod health;
mod pii;

pub use health::*;
pub use pii::*;

//! Application State
//!
//! 所有请求共享的只读状态，启动时构建一次

use crate::infrastructure::gateway::{Dispatcher, RouteTable};

/// 应用状态
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(routes: RouteTable) -> Self {
        Self {
            dispatcher: Dispatcher::new(routes),
        }
    }
}

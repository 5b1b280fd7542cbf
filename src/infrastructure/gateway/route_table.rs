//! 静态路由表
//!
//! key 为 `"<METHOD> <path>"` 字面量，精确匹配：
//! 不做尾斜杠归一化，不解析 query，不支持路径参数。

use std::collections::HashMap;
use std::fmt;

use http::Method;

use crate::application::{self, RouteHandler};

/// 路由 key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey(String);

impl RouteKey {
    pub fn new(method: &str, path: &str) -> Self {
        Self(format!("{} {}", method, path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 已注册的路由
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub handler: RouteHandler,
}

impl Route {
    pub fn key(&self) -> RouteKey {
        RouteKey::new(self.method.as_str(), self.path)
    }
}

/// 路由表，启动时构建一次，之后只读
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<RouteKey, Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// v1 API 全部路由
    pub fn v1() -> Self {
        Self::new()
            .route(Method::GET, "/v1/health", application::get_health)
            .route(Method::POST, "/v1/pii/detect", application::pii_detect)
            .route(Method::POST, "/v1/pii/anonymize", application::pii_anonymize)
            .route(
                Method::POST,
                "/v1/pii/detect-and-anonymize",
                application::pii_detect_and_anonymize,
            )
    }

    /// 注册路由，同一 key 后注册者覆盖先注册者
    pub fn route(mut self, method: Method, path: &'static str, handler: RouteHandler) -> Self {
        let route = Route {
            method,
            path,
            handler,
        };
        self.routes.insert(route.key(), route);
        self
    }

    pub fn get(&self, key: &RouteKey) -> Option<&Route> {
        self.routes.get(key)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// 按 key 排序遍历，用于启动日志
    pub fn routes(&self) -> Vec<&Route> {
        let mut routes: Vec<&Route> = self.routes.values().collect();
        routes.sort_by(|a, b| {
            a.path
                .cmp(b.path)
                .then_with(|| a.method.as_str().cmp(b.method.as_str()))
        });
        routes
    }
}

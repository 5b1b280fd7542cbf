//! Gateway 边界数据结构
//!
//! 与 API 网关 proxy 事件的 JSON 形状一致（camelCase）。

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// 入站请求
///
/// 只保留 method 和 path，body 等其余字段在反序列化时直接丢弃，从不读取。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    pub http_method: String,
    pub path: String,
}

impl GatewayRequest {
    pub fn new(http_method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            path: path.into(),
        }
    }
}

/// 出站响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl GatewayResponse {
    /// JSON 响应，始终带 `Content-Type: application/json`
    pub fn json(status: StatusCode, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }

    /// `status_code` 不在 100..=999 范围内时按 500 处理
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ignores_body_and_extra_fields() {
        let event = r#"{
            "httpMethod": "POST",
            "path": "/v1/pii/detect",
            "body": "{\"text\":\"John Doe, 555-0100\"}",
            "headers": {"X-Trace": "abc"},
            "queryStringParameters": null
        }"#;
        let request: GatewayRequest = serde_json::from_str(event).unwrap();
        assert_eq!(request, GatewayRequest::new("POST", "/v1/pii/detect"));
    }

    #[test]
    fn test_request_requires_method_and_path() {
        assert!(serde_json::from_str::<GatewayRequest>(r#"{"path": "/v1/health"}"#).is_err());
    }

    #[test]
    fn test_out_of_range_status_code_reads_as_500() {
        let mut response = GatewayResponse::json(StatusCode::OK, "{}".to_string());
        response.status_code = 42;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        response.status_code = 501;
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[test]
    fn test_response_wire_shape() {
        let response = GatewayResponse::json(StatusCode::OK, "{}".to_string());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "statusCode": 200,
                "headers": {"Content-Type": "application/json"},
                "body": "{}"
            })
        );
        assert_eq!(response.content_type(), Some("application/json"));
    }
}

//! PII Handlers - 占位实现
//!
//! 检测/匿名化逻辑尚不存在，三个端点都固定返回 501 + NOT_IMPLEMENTED。
//! 实现真实逻辑时整体替换这些函数，但必须保持 `{ error: { code, message } }` 形状。

use crate::application::outcome::HandlerOutcome;
use crate::domain::{make_error, ErrorBody, ErrorCode};

pub const DETECT_NOT_IMPLEMENTED: &str = "PII detection is not yet implemented.";
pub const ANONYMIZE_NOT_IMPLEMENTED: &str = "PII anonymization is not yet implemented.";
pub const DETECT_AND_ANONYMIZE_NOT_IMPLEMENTED: &str =
    "Combined PII detect-and-anonymize is not yet implemented.";

pub fn handle_pii_detect() -> ErrorBody {
    make_error(ErrorCode::NotImplemented, DETECT_NOT_IMPLEMENTED).into()
}

pub fn handle_pii_anonymize() -> ErrorBody {
    make_error(ErrorCode::NotImplemented, ANONYMIZE_NOT_IMPLEMENTED).into()
}

pub fn handle_pii_detect_and_anonymize() -> ErrorBody {
    make_error(ErrorCode::NotImplemented, DETECT_AND_ANONYMIZE_NOT_IMPLEMENTED).into()
}

/// POST /v1/pii/detect
pub fn pii_detect() -> HandlerOutcome {
    HandlerOutcome::not_implemented(handle_pii_detect())
}

/// POST /v1/pii/anonymize
pub fn pii_anonymize() -> HandlerOutcome {
    HandlerOutcome::not_implemented(handle_pii_anonymize())
}

/// POST /v1/pii/detect-and-anonymize
pub fn pii_detect_and_anonymize() -> HandlerOutcome {
    HandlerOutcome::not_implemented(handle_pii_detect_and_anonymize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn stubs() -> [(fn() -> ErrorBody, &'static str); 3] {
        [
            (handle_pii_detect, DETECT_NOT_IMPLEMENTED),
            (handle_pii_anonymize, ANONYMIZE_NOT_IMPLEMENTED),
            (
                handle_pii_detect_and_anonymize,
                DETECT_AND_ANONYMIZE_NOT_IMPLEMENTED,
            ),
        ]
    }

    #[test]
    fn test_stubs_return_not_implemented() {
        for (handler, message) in stubs() {
            let body = handler();
            assert_eq!(body.error.code, ErrorCode::NotImplemented);
            assert_eq!(body.error.message, message);
            assert!(!body.error.message.is_empty());
        }
    }

    #[test]
    fn test_stub_body_has_single_error_field() {
        for (handler, _) in stubs() {
            let value = serde_json::to_value(handler()).unwrap();
            let object = value.as_object().unwrap();
            assert_eq!(object.len(), 1);
            assert_eq!(value["error"]["code"], "NOT_IMPLEMENTED");
            assert!(value["error"]["message"].is_string());
        }
    }

    #[test]
    fn test_stub_outcomes_are_501() {
        for outcome in [pii_detect(), pii_anonymize(), pii_detect_and_anonymize()] {
            assert_eq!(outcome.status(), StatusCode::NOT_IMPLEMENTED);
            assert_eq!(outcome.error_code(), Some(ErrorCode::NotImplemented));
        }
    }

    #[test]
    fn test_detect_message() {
        let value = serde_json::to_value(handle_pii_detect()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "error": {
                    "code": "NOT_IMPLEMENTED",
                    "message": "PII detection is not yet implemented."
                }
            })
        );
    }
}

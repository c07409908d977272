/**
 * Response Envelope
 *
 * Every API endpoint answers with HTTP 200 and a uniform JSON envelope:
 *
 * ```json
 * { "code": 100, "msg": "登录成功", "data": { ... } }
 * ```
 *
 * # Semantic Codes
 *
 * - `100` - success
 * - `103` - request error (bad input, business-rule failure; msg is caller-facing)
 * - `104` - server error (internal failure; msg stays generic, detail is logged)
 *
 * The HTTP status code is always 200; clients branch on `code`.
 */

use axum::{http::StatusCode, response::{IntoResponse, Json, Response}};
use serde::Serialize;

/// Semantic success code.
pub const SUCCESS: u16 = 100;
/// Semantic request-error code (validation / business-rule failure).
pub const REQUEST_ERROR: u16 = 103;
/// Semantic server-error code (internal failure).
pub const SERVER_ERROR: u16 = 104;

/// Caller-facing message for any internal failure.
pub const SERVER_ERROR_MSG: &str = "服务器端错误";

/// Uniform API response envelope
///
/// Wraps every endpoint result with a semantic code, a message, and an
/// optional payload. `data` is always present in the JSON, `null` when
/// there is no payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Semantic status code (100 / 103 / 104)
    pub code: u16,
    /// Caller-facing message
    pub msg: String,
    /// Payload; serialized as `null` when there is none, so the envelope
    /// shape is identical across all responses
    pub data: Option<T>,
}

impl ApiResponse<serde_json::Value> {
    /// Success envelope with no payload.
    pub fn ok(msg: impl Into<String>) -> Self {
        Self { code: SUCCESS, msg: msg.into(), data: None }
    }

    /// Request-error envelope (code 103) with a caller-facing message.
    pub fn request_error(msg: impl Into<String>) -> Self {
        Self { code: REQUEST_ERROR, msg: msg.into(), data: None }
    }

    /// Server-error envelope (code 104) with the generic message.
    pub fn server_error() -> Self {
        Self { code: SERVER_ERROR, msg: SERVER_ERROR_MSG.to_string(), data: None }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope carrying a payload.
    pub fn ok_with(msg: impl Into<String>, data: T) -> Self {
        Self { code: SUCCESS, msg: msg.into(), data: Some(data) }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        // Semantic code travels in the body; transport status is always 200.
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ok_envelope_serializes_null_data() {
        let resp = ApiResponse::ok("注册成功");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": 100, "msg": "注册成功", "data": null })
        );
    }

    #[test]
    fn test_error_envelopes_carry_data_field_too() {
        let json = serde_json::to_value(ApiResponse::request_error("验证码错误")).unwrap();
        assert_eq!(json["data"], serde_json::Value::Null);

        let json = serde_json::to_value(ApiResponse::server_error()).unwrap();
        assert_eq!(json["data"], serde_json::Value::Null);
    }

    #[test]
    fn test_ok_with_payload() {
        let resp = ApiResponse::ok_with("ok", serde_json::json!({ "token": "abc" }));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 100);
        assert_eq!(json["data"]["token"], "abc");
    }

    #[test]
    fn test_request_error_code() {
        let resp = ApiResponse::request_error("验证码错误");
        assert_eq!(resp.code, REQUEST_ERROR);
        assert_eq!(resp.msg, "验证码错误");
    }

    #[test]
    fn test_server_error_is_generic() {
        let resp = ApiResponse::server_error();
        assert_eq!(resp.code, SERVER_ERROR);
        assert_eq!(resp.msg, SERVER_ERROR_MSG);
    }
}

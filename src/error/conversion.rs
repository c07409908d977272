/**
 * Error Conversion
 *
 * Renders `ApiError` values as response envelopes. All errors travel as
 * HTTP 200; the semantic code in the body tells the caller what happened.
 *
 * # Mapping
 *
 * - `Request` - code 103 with the error's own message
 * - `Smtp` - code 104 with a hint to check the SMTP configuration
 * - everything else - code 104 with the generic message; the underlying
 *   error is logged at ERROR level and never leaks to the caller
 */

use axum::response::{IntoResponse, Response};

use crate::error::types::ApiError;
use crate::response::ApiResponse;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Request(msg) => ApiResponse::request_error(msg).into_response(),
            ApiError::Smtp(err) => {
                tracing::error!("verification mail delivery failed: {:?}", err);
                let mut resp = ApiResponse::server_error();
                resp.msg = "验证码发送失败，请检查 smtp 配置".to_string();
                resp.into_response()
            }
            other => {
                tracing::error!("internal error: {:?}", other);
                ApiResponse::server_error().into_response()
            }
        }
    }
}

pub mod require_jwt;

pub use require_jwt::RequireJWT;

use actix_web::{HttpResponse, http::StatusCode};

use crate::models::{ApiResponse, ErrorCode};

/// 中间件中直接短路请求时使用的统一响应
pub(crate) fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    let code = match status {
        StatusCode::UNAUTHORIZED => ErrorCode::Unauthorized,
        StatusCode::FORBIDDEN => ErrorCode::Forbidden,
        _ => ErrorCode::InternalServerError,
    };
    HttpResponse::build(status).json(ApiResponse::error_empty(code, message))
}

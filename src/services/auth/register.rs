use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, RegisterRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::users::{check_email_available, validate_new_user};
use crate::utils::password::hash_password;

use super::AuthService;

/// 学生自助注册，角色固定为学生
pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut create_request = CreateUserRequest {
        email: register_request.email.trim().to_string(),
        password: register_request.password,
        first_name: register_request.first_name.trim().to_string(),
        last_name: register_request.last_name.trim().to_string(),
        role: UserRole::Student,
        student_group: register_request.student_group,
        department: None,
    };

    if let Err(response) = validate_new_user(&create_request) {
        return Ok(response);
    }
    if let Err(response) = check_email_available(storage.as_ref(), &create_request.email, None).await
    {
        return Ok(response);
    }

    create_request.password = match hash_password(&create_request.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(super::super::internal_error("Password hashing failed", e)),
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("Student {} registered", user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "Registration successful")))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Registration failed: {e}"),
        ))),
    }
}

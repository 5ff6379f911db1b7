use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{UserService, check_email_available, validate_new_user};
use crate::models::{ApiResponse, users::requests::CreateUserRequest};
use crate::services::access::{self, Action, Resource};
use crate::utils::password::hash_password;

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let admin = match access::require(request, Action::Manage, Resource::Users) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    user_data.email = user_data.email.trim().to_string();
    user_data.first_name = user_data.first_name.trim().to_string();
    user_data.last_name = user_data.last_name.trim().to_string();

    if let Err(response) = validate_new_user(&user_data) {
        return Ok(response);
    }

    let storage = service.get_storage(request);
    if let Err(response) = check_email_available(storage.as_ref(), &user_data.email, None).await {
        return Ok(response);
    }

    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(crate::services::internal_error("Password hashing failed", e)),
    };

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("Admin {} created {} {}", admin.id, user.role, user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "User created")))
        }
        Err(e) => Ok(crate::services::internal_error("User creation failed", e)),
    }
}

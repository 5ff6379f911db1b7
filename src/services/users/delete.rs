use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{UserService, invalidate_cached_user};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{self, Action, Resource};

/// 删除用户及其全部关联记录
pub async fn delete_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let admin = match access::require(request, Action::Manage, Resource::Users) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if admin.id == user_id {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CanNotDeleteCurrentUser,
            "Cannot delete the current user",
        )));
    }

    match service.get_storage(request).delete_user(user_id).await {
        Ok(true) => {
            invalidate_cached_user(request, user_id).await;
            tracing::info!("Admin {} deleted user {}", admin.id, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("User deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to delete user", e)),
    }
}

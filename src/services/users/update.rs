use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{UserService, check_email_available, invalidate_cached_user};
use crate::models::common::Patch;
use crate::models::{ApiResponse, ErrorCode, users::requests::UserPatch};
use crate::services::access::{self, Action, Resource};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_name, validate_password};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut patch: UserPatch,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Users) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    if let Some(email) = patch.email.as_set() {
        if let Err(msg) = validate_email(email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
        }
        if let Err(response) = check_email_available(storage.as_ref(), email, Some(user_id)).await
        {
            return Ok(response);
        }
    }

    for name in [patch.first_name.as_set(), patch.last_name.as_set()]
        .into_iter()
        .flatten()
    {
        if let Err(msg) = validate_name(name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
        }
    }

    // 明文密码替换为哈希后再交给存储层合并
    if let Patch::Set(password) = std::mem::take(&mut patch.password) {
        if let Err(msg) = validate_password(&password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
        }
        match hash_password(&password) {
            Ok(hash) => patch.password = Patch::Set(hash),
            Err(e) => return Ok(crate::services::internal_error("Password hashing failed", e)),
        }
    }

    match storage.update_user(user_id, patch).await {
        Ok(Some(user)) => {
            invalidate_cached_user(request, user_id).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "User updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to update user", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse,
    users::{
        entities::UserRole,
        requests::{UserListParams, UserListQuery},
    },
};
use crate::services::access::{self, Action, Resource};

pub async fn list_users(
    service: &UserService,
    query: UserListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Users) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    let (page, size) = query.pagination.normalized();
    let list_query = UserListQuery {
        page,
        size,
        role: query.role,
        search: query.search.filter(|s| !s.trim().is_empty()),
    };

    match storage.list_users_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "User list retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to retrieve user list", e)),
    }
}

/// 教师列表对所有角色开放，学生列表只对教师和管理员开放
pub async fn list_by_role(
    service: &UserService,
    role: UserRole,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let resource = match role {
        UserRole::Teacher => Resource::Teachers,
        UserRole::Student => Resource::Students,
        UserRole::Admin => Resource::Users,
    };
    if let Err(response) = access::require(request, Action::View, resource) {
        return Ok(response);
    }

    match service.get_storage(request).list_users_by_role(role).await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            users,
            "User list retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to retrieve user list", e)),
    }
}

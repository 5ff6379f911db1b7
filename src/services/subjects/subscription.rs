use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::SubscriptionQuery};
use crate::services::access::{self, Action, Resource};
use crate::storage::Storage;

/// 解析目标教师并完成权限判定
async fn resolve_teacher(
    storage: &dyn Storage,
    query: &SubscriptionQuery,
    action: Action,
    request: &HttpRequest,
) -> Result<i64, HttpResponse> {
    let teacher_id = match query.teacher_id.or_else(|| RequireJWT::extract_user_id(request)) {
        Some(id) => id,
        None => {
            return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    access::require(request, action, Resource::TeacherSubjects { teacher_id })?;

    match storage.get_user_by_id(teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => Ok(teacher_id),
        Ok(Some(_)) => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("User {teacher_id} is not a teacher"),
        ))),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Teacher not found",
        ))),
        Err(e) => Err(crate::services::internal_error("Failed to load teacher", e)),
    }
}

/// 订阅是幂等的，重复订阅同样返回成功
pub async fn subscribe(
    service: &SubjectService,
    subject_id: i64,
    query: SubscriptionQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let teacher_id =
        match resolve_teacher(storage.as_ref(), &query, Action::Subscribe, request).await {
            Ok(id) => id,
            Err(response) => return Ok(response),
        };
    if let Err(response) = crate::services::ensure_subject(storage.as_ref(), subject_id).await {
        return Ok(response);
    }

    match storage.subscribe_teacher(teacher_id, subject_id).await {
        Ok(created) => {
            if created {
                tracing::info!("Teacher {} subscribed to subject {}", teacher_id, subject_id);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Subscribed to subject")))
        }
        Err(e) => Ok(crate::services::internal_error("Failed to subscribe", e)),
    }
}

pub async fn unsubscribe(
    service: &SubjectService,
    subject_id: i64,
    query: SubscriptionQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let teacher_id =
        match resolve_teacher(storage.as_ref(), &query, Action::Subscribe, request).await {
            Ok(id) => id,
            Err(response) => return Ok(response),
        };

    match storage.unsubscribe_teacher(teacher_id, subject_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Unsubscribed"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Subscription not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to unsubscribe", e)),
    }
}

pub async fn list_subscribed(
    service: &SubjectService,
    query: SubscriptionQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let teacher_id = match resolve_teacher(storage.as_ref(), &query, Action::View, request).await
    {
        Ok(id) => id,
        Err(response) => return Ok(response),
    };

    match storage.list_teacher_subjects(teacher_id).await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subjects,
            "Subscribed subjects retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to list subjects", e)),
    }
}

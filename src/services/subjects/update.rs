use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::SubjectPatch};
use crate::services::access::{self, Action, Resource};

pub async fn update_subject(
    service: &SubjectService,
    subject_id: i64,
    patch: SubjectPatch,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Subjects) {
        return Ok(response);
    }

    if patch.name.as_set().is_some_and(|name| name.trim().is_empty()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SubjectNameInvalid,
            "Subject name must not be empty",
        )));
    }

    match service
        .get_storage(request)
        .update_subject(subject_id, patch)
        .await
    {
        Ok(Some(subject)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(subject, "Subject updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to update subject", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{ApiResponse, ErrorCode, grades::requests::GradePatch};
use crate::services::access::{self, Action, Resource};

pub async fn update_grade(
    service: &GradeService,
    id: i64,
    patch: GradePatch,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Grades) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    if let Some(subject_id) = patch.subject_id.as_set()
        && let Err(response) = crate::services::ensure_subject(storage.as_ref(), *subject_id).await
    {
        return Ok(response);
    }

    match storage.update_grade(id, patch).await {
        Ok(Some(updated)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "Grade updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to update grade", e)),
    }
}

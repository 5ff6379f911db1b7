use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{self, Action, Resource};

pub async fn delete_grade(
    service: &GradeService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Grades) {
        return Ok(response);
    }

    match service.get_storage(request).delete_grade(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Grade deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to delete grade", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::ApiResponse;
use crate::services::access::{self, Action, Resource};

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::View, Resource::Subjects) {
        return Ok(response);
    }

    match service.get_storage(request).list_subjects().await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subjects,
            "Subject list retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to list subjects", e)),
    }
}

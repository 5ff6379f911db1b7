use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::CreateSubjectRequest};
use crate::services::access::{self, Action, Resource};

pub async fn create_subject(
    service: &SubjectService,
    mut subject: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Subjects) {
        return Ok(response);
    }

    subject.name = subject.name.trim().to_string();
    if subject.name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SubjectNameInvalid,
            "Subject name must not be empty",
        )));
    }

    match service.get_storage(request).create_subject(subject).await {
        Ok(subject) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(subject, "Subject created")))
        }
        Err(e) => Ok(crate::services::internal_error("Failed to create subject", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{ApiResponse, grades::requests::CreateGradeRequest};
use crate::services::access::{self, Action, Resource};

/// 录入成绩，分值不做范围限制
pub async fn create_grade(
    service: &GradeService,
    record: CreateGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Grades) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    if let Err(response) = crate::services::ensure_student_and_subject(
        storage.as_ref(),
        record.student_id,
        record.subject_id,
    )
    .await
    {
        return Ok(response);
    }

    match storage.create_grade(record).await {
        Ok(created) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "Grade created")))
        }
        Err(e) => Ok(crate::services::internal_error("Failed to create grade", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LabSubmissionService;
use crate::models::ApiResponse;
use crate::services::RecordScope;
use crate::services::access::{self, Resource};

pub async fn list_submissions(
    service: &LabSubmissionService,
    scope: RecordScope,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (action, resource) = scope.access(Resource::LabSubmissions);
    if let Err(response) = access::require(request, action, resource) {
        return Ok(response);
    }

    let storage = service.get_storage(request);
    let result = match scope {
        RecordScope::All => storage.list_lab_submissions().await,
        RecordScope::Student(id) => storage.list_lab_submissions_by_student(id).await,
        RecordScope::Subject(id) => storage.list_lab_submissions_by_subject(id).await,
    };

    match result {
        Ok(submissions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            submissions,
            "Lab submissions retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to list lab submissions", e)),
    }
}

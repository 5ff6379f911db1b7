use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::ApiResponse;
use crate::services::RecordScope;
use crate::services::access::{self, Resource};

pub async fn list_grades(
    service: &GradeService,
    scope: RecordScope,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (action, resource) = scope.access(Resource::Grades);
    if let Err(response) = access::require(request, action, resource) {
        return Ok(response);
    }

    let storage = service.get_storage(request);
    let result = match scope {
        RecordScope::All => storage.list_grades().await,
        RecordScope::Student(id) => storage.list_grades_by_student(id).await,
        RecordScope::Subject(id) => storage.list_grades_by_subject(id).await,
    };

    match result {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            records,
            "Grades retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to list grades", e)),
    }
}

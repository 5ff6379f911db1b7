use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LabSubmissionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{self, Action, Resource};

pub async fn delete_submission(
    service: &LabSubmissionService,
    submission_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::LabSubmissions) {
        return Ok(response);
    }

    match service
        .get_storage(request)
        .delete_lab_submission(submission_id)
        .await
    {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Lab submission deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LabSubmissionNotFound,
            "Lab submission not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to delete lab submission", e)),
    }
}

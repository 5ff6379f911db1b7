use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode, attendance::requests::AttendancePatch};
use crate::services::access::{self, Action, Resource};

pub async fn update_attendance(
    service: &AttendanceService,
    id: i64,
    patch: AttendancePatch,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Attendance) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    if let Some(subject_id) = patch.subject_id.as_set()
        && let Err(response) = crate::services::ensure_subject(storage.as_ref(), *subject_id).await
    {
        return Ok(response);
    }

    match storage.update_attendance(id, patch).await {
        Ok(Some(updated)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "Attendance record updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "Attendance record not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to update attendance record", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, attendance::requests::CreateAttendanceRequest};
use crate::services::access::{self, Action, Resource};

pub async fn create_attendance(
    service: &AttendanceService,
    record: CreateAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Attendance) {
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

    match storage.create_attendance(record).await {
        Ok(created) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "Attendance record created")))
        }
        Err(e) => Ok(crate::services::internal_error("Failed to create attendance record", e)),
    }
}

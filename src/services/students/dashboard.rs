use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, load_student};
use crate::errors::Result;
use crate::grading::{DashboardSummary, compute_dashboard};
use crate::models::ApiResponse;
use crate::storage::Storage;

/// 读取学生的全部记录并汇总
///
/// 成绩按创建时间倒序取出，最近成绩即列表前几条。
pub async fn build_dashboard(storage: &dyn Storage, student_id: i64) -> Result<DashboardSummary> {
    let grades = storage.list_grades_by_student(student_id).await?;
    let submissions = storage.list_lab_submissions_by_student(student_id).await?;
    let templates = storage.list_lab_templates().await?;
    let attendance = storage.list_attendance_by_student(student_id).await?;
    let attestations = storage.list_attestations_by_student(student_id).await?;

    Ok(compute_dashboard(
        &grades,
        &submissions,
        &templates,
        &attendance,
        attestations,
    ))
}

pub async fn get_dashboard(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    if let Err(response) = load_student(storage.as_ref(), student_id, request).await {
        return Ok(response);
    }

    match build_dashboard(storage.as_ref(), student_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summary,
            "Dashboard retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to build dashboard", e)),
    }
}

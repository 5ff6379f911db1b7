use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, load_student};
use crate::models::ApiResponse;

/// 学生可见的实验模板，不按所选科目过滤
pub async fn list_for_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    if let Err(response) = load_student(storage.as_ref(), student_id, request).await {
        return Ok(response);
    }

    match storage.list_lab_templates().await {
        Ok(templates) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            templates,
            "Lab templates retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to list lab templates", e)),
    }
}

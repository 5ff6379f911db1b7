use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LabTemplateService;
use crate::models::lab_templates::requests::{LabTemplatePatch, validate_max_points};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{self, Action, Resource};

/// 修改模板；下调满分不会改动已有提交，超出部分由修复流程处理
pub async fn update_template(
    service: &LabTemplateService,
    template_id: i64,
    patch: LabTemplatePatch,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::LabTemplates) {
        return Ok(response);
    }

    if patch.title.as_set().is_some_and(|t| t.trim().is_empty()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::LabTemplateInvalid,
            "Lab title must not be empty",
        )));
    }
    if let Some(max_points) = patch.max_points.as_set()
        && let Err(msg) = validate_max_points(*max_points)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::LabTemplateInvalid, msg)));
    }

    let storage = service.get_storage(request);
    if let Some(subject_id) = patch.subject_id.as_set()
        && let Err(response) = crate::services::ensure_subject(storage.as_ref(), *subject_id).await
    {
        return Ok(response);
    }

    match storage.update_lab_template(template_id, patch).await {
        Ok(Some(template)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(template, "Lab template updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LabTemplateNotFound,
            "Lab template not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to update lab template", e)),
    }
}

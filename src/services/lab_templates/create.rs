use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LabTemplateService;
use crate::models::lab_templates::requests::{CreateLabTemplateRequest, validate_max_points};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{self, Action, Resource};

pub async fn create_template(
    service: &LabTemplateService,
    mut template: CreateLabTemplateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::LabTemplates) {
        return Ok(response);
    }

    template.title = template.title.trim().to_string();
    if template.title.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::LabTemplateInvalid,
            "Lab title must not be empty",
        )));
    }
    if let Err(msg) = validate_max_points(template.max_points) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::LabTemplateInvalid, msg)));
    }

    let storage = service.get_storage(request);
    if let Err(response) =
        crate::services::ensure_subject(storage.as_ref(), template.subject_id).await
    {
        return Ok(response);
    }

    match storage.create_lab_template(template).await {
        Ok(template) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(template, "Lab template created"))),
        Err(e) => Ok(crate::services::internal_error("Failed to create lab template", e)),
    }
}

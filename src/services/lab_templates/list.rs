use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LabTemplateService;
use crate::models::ApiResponse;
use crate::services::access::{self, Action, Resource};

pub async fn list_templates(
    service: &LabTemplateService,
    subject_id: Option<i64>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::View, Resource::LabTemplates) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    let result = match subject_id {
        Some(subject_id) => storage.list_lab_templates_by_subject(subject_id).await,
        None => storage.list_lab_templates().await,
    };

    match result {
        Ok(templates) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            templates,
            "Lab templates retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to list lab templates", e)),
    }
}

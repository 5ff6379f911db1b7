use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LabTemplateService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{self, Action, Resource};

pub async fn delete_template(
    service: &LabTemplateService,
    template_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::LabTemplates) {
        return Ok(response);
    }

    match service
        .get_storage(request)
        .delete_lab_template(template_id)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Lab template deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LabTemplateNotFound,
            "Lab template not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to delete lab template", e)),
    }
}

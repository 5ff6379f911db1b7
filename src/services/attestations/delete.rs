use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttestationService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{self, Action, Resource};

pub async fn delete_attestation(
    service: &AttestationService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Attestations) {
        return Ok(response);
    }

    match service.get_storage(request).delete_attestation(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Attestation deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttestationNotFound,
            "Attestation not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to delete attestation", e)),
    }
}

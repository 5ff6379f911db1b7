use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttestationService;
use crate::models::{ApiResponse, ErrorCode, attestations::requests::AttestationPatch};
use crate::services::access::{self, Action, Resource};

pub async fn update_attestation(
    service: &AttestationService,
    id: i64,
    patch: AttestationPatch,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Attestations) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    if let Some(subject_id) = patch.subject_id.as_set()
        && let Err(response) = crate::services::ensure_subject(storage.as_ref(), *subject_id).await
    {
        return Ok(response);
    }

    match storage.update_attestation(id, patch).await {
        Ok(Some(updated)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "Attestation updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttestationNotFound,
            "Attestation not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to update attestation", e)),
    }
}

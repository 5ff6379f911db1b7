use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttestationService;
use crate::models::{ApiResponse, attestations::requests::CreateAttestationRequest};
use crate::services::access::{self, Action, Resource};

pub async fn create_attestation(
    service: &AttestationService,
    record: CreateAttestationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::Attestations) {
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

    match storage.create_attestation(record).await {
        Ok(created) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "Attestation created")))
        }
        Err(e) => Ok(crate::services::internal_error("Failed to create attestation", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attestations::requests::{CreateAttestationRequest, AttestationPatch};
use crate::services::{AttestationService, RecordScope};
use crate::utils::SafeIDI64;

static ATTESTATION_SERVICE: Lazy<AttestationService> = Lazy::new(AttestationService::new_lazy);

pub async fn list_all(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTESTATION_SERVICE.list_attestations(RecordScope::All, &req).await
}

pub async fn list_by_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTESTATION_SERVICE
        .list_attestations(RecordScope::Subject(subject_id.0), &req)
        .await
}

pub async fn list_by_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTESTATION_SERVICE
        .list_attestations(RecordScope::Student(student_id.0), &req)
        .await
}

pub async fn create_attestation(
    req: HttpRequest,
    record: web::Json<CreateAttestationRequest>,
) -> ActixResult<HttpResponse> {
    ATTESTATION_SERVICE.create_attestation(record.into_inner(), &req).await
}

pub async fn update_attestation(
    req: HttpRequest,
    id: SafeIDI64,
    patch: web::Json<AttestationPatch>,
) -> ActixResult<HttpResponse> {
    ATTESTATION_SERVICE
        .update_attestation(id.0, patch.into_inner(), &req)
        .await
}

pub async fn delete_attestation(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTESTATION_SERVICE.delete_attestation(id.0, &req).await
}

pub fn configure_attestation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attestations")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_all))
            .route("", web::post().to(create_attestation))
            .route("/subject/{id}", web::get().to(list_by_subject))
            .route("/student/{id}", web::get().to(list_by_student))
            .route("/{id}", web::put().to(update_attestation))
            .route("/{id}", web::delete().to(delete_attestation)),
    );
}

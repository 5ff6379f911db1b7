use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::subjects::requests::{CreateSubjectRequest, SubjectPatch, SubscriptionQuery};
use crate::services::SubjectService;
use crate::utils::SafeIDI64;

static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req).await
}

pub async fn create_subject(
    req: HttpRequest,
    subject: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(subject.into_inner(), &req)
        .await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeIDI64,
    patch: web::Json<SubjectPatch>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(subject_id.0, patch.into_inner(), &req)
        .await
}

pub async fn delete_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(subject_id.0, &req).await
}

pub async fn subscribe(
    req: HttpRequest,
    subject_id: SafeIDI64,
    query: web::Query<SubscriptionQuery>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .subscribe(subject_id.0, query.into_inner(), &req)
        .await
}

pub async fn unsubscribe(
    req: HttpRequest,
    subject_id: SafeIDI64,
    query: web::Query<SubscriptionQuery>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .unsubscribe(subject_id.0, query.into_inner(), &req)
        .await
}

pub async fn my_subjects(
    req: HttpRequest,
    query: web::Query<SubscriptionQuery>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.my_subjects(query.into_inner(), &req).await
}

pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_subjects))
            .route("", web::post().to(create_subject))
            .route("/my", web::get().to(my_subjects))
            .route("/{id}", web::put().to(update_subject))
            .route("/{id}", web::delete().to(delete_subject))
            .route("/{id}/subscribe", web::post().to(subscribe))
            .route("/{id}/subscribe", web::delete().to(unsubscribe)),
    );
}

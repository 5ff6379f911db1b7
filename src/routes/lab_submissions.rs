use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lab_submissions::requests::{
    CreateLabSubmissionRequest, GradeLabSubmissionRequest,
};
use crate::services::{LabSubmissionService, RecordScope};
use crate::utils::SafeIDI64;

static LAB_SUBMISSION_SERVICE: Lazy<LabSubmissionService> =
    Lazy::new(LabSubmissionService::new_lazy);

pub async fn list_all(req: HttpRequest) -> ActixResult<HttpResponse> {
    LAB_SUBMISSION_SERVICE
        .list_submissions(RecordScope::All, &req)
        .await
}

pub async fn list_by_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LAB_SUBMISSION_SERVICE
        .list_submissions(RecordScope::Subject(subject_id.0), &req)
        .await
}

pub async fn list_by_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LAB_SUBMISSION_SERVICE
        .list_submissions(RecordScope::Student(student_id.0), &req)
        .await
}

pub async fn create_submission(
    req: HttpRequest,
    submission: web::Json<CreateLabSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    LAB_SUBMISSION_SERVICE
        .create_submission(submission.into_inner(), &req)
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    submission_id: SafeIDI64,
    grade: web::Json<GradeLabSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    LAB_SUBMISSION_SERVICE
        .grade_submission(submission_id.0, grade.into_inner(), &req)
        .await
}

pub async fn delete_submission(
    req: HttpRequest,
    submission_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    LAB_SUBMISSION_SERVICE
        .delete_submission(submission_id.0, &req)
        .await
}

pub async fn repair(req: HttpRequest) -> ActixResult<HttpResponse> {
    LAB_SUBMISSION_SERVICE.repair(&req).await
}

pub fn configure_lab_submission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lab-submissions")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_all))
            .route("", web::post().to(create_submission))
            .route("/repair", web::post().to(repair))
            .route("/subject/{id}", web::get().to(list_by_subject))
            .route("/student/{id}", web::get().to(list_by_student))
            .route("/{id}", web::put().to(grade_submission))
            .route("/{id}", web::delete().to(delete_submission)),
    );
}

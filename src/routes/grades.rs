use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::{CreateGradeRequest, GradePatch};
use crate::services::{GradeService, RecordScope};
use crate::utils::SafeIDI64;

static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn list_all(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(RecordScope::All, &req).await
}

pub async fn list_by_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .list_grades(RecordScope::Subject(subject_id.0), &req)
        .await
}

pub async fn list_by_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .list_grades(RecordScope::Student(student_id.0), &req)
        .await
}

pub async fn create_grade(
    req: HttpRequest,
    record: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.create_grade(record.into_inner(), &req).await
}

pub async fn update_grade(
    req: HttpRequest,
    id: SafeIDI64,
    patch: web::Json<GradePatch>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(id.0, patch.into_inner(), &req)
        .await
}

pub async fn delete_grade(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(id.0, &req).await
}

pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_all))
            .route("", web::post().to(create_grade))
            .route("/subject/{id}", web::get().to(list_by_subject))
            .route("/student/{id}", web::get().to(list_by_student))
            .route("/{id}", web::put().to(update_grade))
            .route("/{id}", web::delete().to(delete_grade)),
    );
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::{
    AttendanceService, AttestationService, GradeService, LabSubmissionService, RecordScope,
    StudentService,
};
use crate::utils::SafeIDI64;

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);
static LAB_SUBMISSION_SERVICE: Lazy<LabSubmissionService> =
    Lazy::new(LabSubmissionService::new_lazy);
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);
static ATTESTATION_SERVICE: Lazy<AttestationService> = Lazy::new(AttestationService::new_lazy);

pub async fn dashboard(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.dashboard(student_id.0, &req).await
}

pub async fn grades(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .list_grades(RecordScope::Student(student_id.0), &req)
        .await
}

pub async fn labs(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LAB_SUBMISSION_SERVICE
        .list_submissions(RecordScope::Student(student_id.0), &req)
        .await
}

pub async fn attendance(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(RecordScope::Student(student_id.0), &req)
        .await
}

pub async fn attestations(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTESTATION_SERVICE
        .list_attestations(RecordScope::Student(student_id.0), &req)
        .await
}

pub async fn lab_templates(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.lab_templates(student_id.0, &req).await
}

pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(super::users::list_students))
            .route("/{id}/dashboard", web::get().to(dashboard))
            .route("/{id}/grades", web::get().to(grades))
            .route("/{id}/labs", web::get().to(labs))
            .route("/{id}/attendance", web::get().to(attendance))
            .route("/{id}/attestations", web::get().to(attestations))
            .route("/{id}/lab-templates", web::get().to(lab_templates)),
    );
}

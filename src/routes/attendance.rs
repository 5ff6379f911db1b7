use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{CreateAttendanceRequest, AttendancePatch};
use crate::services::{AttendanceService, RecordScope};
use crate::utils::SafeIDI64;

static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_all(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.list_attendance(RecordScope::All, &req).await
}

pub async fn list_by_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(RecordScope::Subject(subject_id.0), &req)
        .await
}

pub async fn list_by_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(RecordScope::Student(student_id.0), &req)
        .await
}

pub async fn create_attendance(
    req: HttpRequest,
    record: web::Json<CreateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.create_attendance(record.into_inner(), &req).await
}

pub async fn update_attendance(
    req: HttpRequest,
    id: SafeIDI64,
    patch: web::Json<AttendancePatch>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_attendance(id.0, patch.into_inner(), &req)
        .await
}

pub async fn delete_attendance(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.delete_attendance(id.0, &req).await
}

pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_all))
            .route("", web::post().to(create_attendance))
            .route("/subject/{id}", web::get().to(list_by_subject))
            .route("/student/{id}", web::get().to(list_by_student))
            .route("/{id}", web::put().to(update_attendance))
            .route("/{id}", web::delete().to(delete_attendance)),
    );
}

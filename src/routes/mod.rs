pub mod attendance;
pub mod attestations;
pub mod auth;
pub mod grades;
pub mod lab_submissions;
pub mod lab_templates;
pub mod students;
pub mod subjects;
pub mod users;

pub use attendance::configure_attendance_routes;
pub use attestations::configure_attestation_routes;
pub use auth::configure_auth_routes;
pub use grades::configure_grade_routes;
pub use lab_submissions::configure_lab_submission_routes;
pub use lab_templates::configure_lab_template_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_student_routes)
        .configure(configure_subject_routes)
        .configure(configure_lab_template_routes)
        .configure(configure_lab_submission_routes)
        .configure(configure_grade_routes)
        .configure(configure_attendance_routes)
        .configure(configure_attestation_routes);
}

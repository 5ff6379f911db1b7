pub mod access;
pub mod attendance;
pub mod attestations;
pub mod auth;
pub mod grades;
pub mod lab_submissions;
pub mod lab_templates;
pub mod students;
pub mod subjects;
pub mod users;

pub use attendance::AttendanceService;
pub use attestations::AttestationService;
pub use auth::AuthService;
pub use grades::GradeService;
pub use lab_submissions::LabSubmissionService;
pub use lab_templates::LabTemplateService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::errors::PortalError;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 记录类列表的范围：全部、某位学生、某门科目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordScope {
    All,
    Student(i64),
    Subject(i64),
}

impl RecordScope {
    /// 全部只对管理员开放，按科目需要管理权限，按学生走学生记录权限
    pub(crate) fn access(self, managed: access::Resource) -> (access::Action, access::Resource) {
        match self {
            RecordScope::All => (access::Action::View, managed),
            RecordScope::Subject(_) => (access::Action::Manage, managed),
            RecordScope::Student(student_id) => (
                access::Action::View,
                access::Resource::StudentRecords { student_id },
            ),
        }
    }
}

pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

pub(crate) fn cache_from_request(request: &HttpRequest) -> Option<Arc<dyn ObjectCache>> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
}

/// 存储层错误统一映射为 500
pub(crate) fn internal_error(context: &str, e: PortalError) -> HttpResponse {
    tracing::error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{context}: {}", e.message()),
    ))
}

/// 记录类写入前的引用检查：学生存在且角色为学生，科目存在
pub(crate) async fn ensure_student_and_subject(
    storage: &dyn Storage,
    student_id: i64,
    subject_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_id(student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(Some(_)) => {
            return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("User {student_id} is not a student"),
            )));
        }
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                format!("Student {student_id} not found"),
            )));
        }
        Err(e) => return Err(internal_error("Failed to load student", e)),
    }

    ensure_subject(storage, subject_id).await
}

pub(crate) async fn ensure_subject(storage: &dyn Storage, subject_id: i64) -> Result<(), HttpResponse> {
    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            format!("Subject {subject_id} not found"),
        ))),
        Err(e) => Err(internal_error("Failed to load subject", e)),
    }
}

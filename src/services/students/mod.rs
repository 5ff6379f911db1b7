pub mod dashboard;
pub mod lab_templates;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{self, Action, Resource};
use crate::storage::Storage;

/// 学生视角的聚合查询
pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn dashboard(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        dashboard::get_dashboard(self, student_id, request).await
    }

    pub async fn lab_templates(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lab_templates::list_for_student(self, student_id, request).await
    }
}

/// 权限判定后确认目标用户确实是学生
pub(crate) async fn load_student(
    storage: &dyn Storage,
    student_id: i64,
    request: &HttpRequest,
) -> Result<User, HttpResponse> {
    access::require(request, Action::View, Resource::StudentRecords { student_id })?;

    match storage.get_user_by_id(student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => Ok(user),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Student not found",
        ))),
        Err(e) => Err(crate::services::internal_error("Failed to load student", e)),
    }
}

pub mod create;
pub mod delete;
pub mod grade;
pub mod list;
pub mod repair;

pub use repair::repair_submissions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::grading::PointsError;
use crate::models::lab_submissions::requests::{
    CreateLabSubmissionRequest, GradeLabSubmissionRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

use super::RecordScope;

pub struct LabSubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl LabSubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_submissions(
        &self,
        scope: RecordScope,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, scope, request).await
    }

    pub async fn create_submission(
        &self,
        submission: CreateLabSubmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, submission, request).await
    }

    // 评分（整体替换分数、评语、状态）
    pub async fn grade_submission(
        &self,
        submission_id: i64,
        grade: GradeLabSubmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, submission_id, grade, request).await
    }

    pub async fn delete_submission(
        &self,
        submission_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_submission(self, submission_id, request).await
    }

    // 修复超出满分的历史提交
    pub async fn repair(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        repair::handle_repair(self, request).await
    }
}

pub(crate) fn points_error_response(err: PointsError) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::from(err), err.to_string()))
}

pub(crate) fn template_not_found(template_id: i64) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::LabTemplateNotFound,
        format!("Lab template {template_id} not found"),
    ))
}

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::RecordScope;
use crate::models::grades::requests::{CreateGradeRequest, GradePatch};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 按创建时间倒序
    pub async fn list_grades(
        &self,
        scope: RecordScope,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, scope, request).await
    }

    pub async fn create_grade(
        &self,
        record: CreateGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(self, record, request).await
    }

    pub async fn update_grade(
        &self,
        id: i64,
        patch: GradePatch,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(self, id, patch, request).await
    }

    pub async fn delete_grade(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_grade(self, id, request).await
    }
}

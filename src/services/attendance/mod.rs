pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::RecordScope;
use crate::models::attendance::requests::{CreateAttendanceRequest, AttendancePatch};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 按日期倒序
    pub async fn list_attendance(
        &self,
        scope: RecordScope,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, scope, request).await
    }

    pub async fn create_attendance(
        &self,
        record: CreateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_attendance(self, record, request).await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        patch: AttendancePatch,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attendance(self, id, patch, request).await
    }

    pub async fn delete_attendance(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_attendance(self, id, request).await
    }
}

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::lab_templates::requests::{CreateLabTemplateRequest, LabTemplatePatch};
use crate::storage::Storage;

pub struct LabTemplateService {
    storage: Option<Arc<dyn Storage>>,
}

impl LabTemplateService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_templates(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_templates(self, None, request).await
    }

    // 按 orderNumber 升序
    pub async fn list_templates_by_subject(
        &self,
        subject_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_templates(self, Some(subject_id), request).await
    }

    pub async fn create_template(
        &self,
        template: CreateLabTemplateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_template(self, template, request).await
    }

    pub async fn update_template(
        &self,
        template_id: i64,
        patch: LabTemplatePatch,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_template(self, template_id, patch, request).await
    }

    pub async fn delete_template(
        &self,
        template_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_template(self, template_id, request).await
    }
}

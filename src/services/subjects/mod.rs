pub mod create;
pub mod delete;
pub mod list;
pub mod subscription;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::{CreateSubjectRequest, SubjectPatch, SubscriptionQuery};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_subjects(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_subjects(self, request).await
    }

    pub async fn create_subject(
        &self,
        subject: CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, subject, request).await
    }

    pub async fn update_subject(
        &self,
        subject_id: i64,
        patch: SubjectPatch,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, subject_id, patch, request).await
    }

    pub async fn delete_subject(
        &self,
        subject_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, subject_id, request).await
    }

    // 教师订阅科目
    pub async fn subscribe(
        &self,
        subject_id: i64,
        query: SubscriptionQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subscription::subscribe(self, subject_id, query, request).await
    }

    pub async fn unsubscribe(
        &self,
        subject_id: i64,
        query: SubscriptionQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subscription::unsubscribe(self, subject_id, query, request).await
    }

    // 教师已订阅的科目
    pub async fn my_subjects(
        &self,
        query: SubscriptionQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subscription::list_subscribed(self, query, request).await
    }
}

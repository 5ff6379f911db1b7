pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::RecordScope;
use crate::models::attestations::requests::{CreateAttestationRequest, AttestationPatch};
use crate::storage::Storage;

pub struct AttestationService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttestationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_attestations(
        &self,
        scope: RecordScope,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_attestations(self, scope, request).await
    }

    pub async fn create_attestation(
        &self,
        record: CreateAttestationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_attestation(self, record, request).await
    }

    pub async fn update_attestation(
        &self,
        id: i64,
        patch: AttestationPatch,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attestation(self, id, patch, request).await
    }

    pub async fn delete_attestation(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_attestation(self, id, request).await
    }
}

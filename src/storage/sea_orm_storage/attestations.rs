//! 考核存储操作

use super::SeaOrmStorage;
use crate::entity::attestations::{ActiveModel, Column, Entity as Attestations};
use crate::errors::{PortalError, Result};
use crate::models::{
    attestations::{
        entities::Attestation,
        requests::{AttestationPatch, CreateAttestationRequest},
    },
    common::Merge,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Select,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_attestation_impl(
        &self,
        req: CreateAttestationRequest,
    ) -> Result<Attestation> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            subject_id: Set(req.subject_id),
            kind: Set(req.kind.to_string()),
            passed: Set(req.passed),
            comment: Set(req.comment),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建考核记录失败: {e}")))?;

        Ok(result.into_attestation())
    }

    pub async fn list_attestations_impl(&self) -> Result<Vec<Attestation>> {
        self.fetch_attestations(Attestations::find()).await
    }

    pub async fn list_attestations_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Attestation>> {
        self.fetch_attestations(Attestations::find().filter(Column::StudentId.eq(student_id)))
            .await
    }

    pub async fn list_attestations_by_subject_impl(
        &self,
        subject_id: i64,
    ) -> Result<Vec<Attestation>> {
        self.fetch_attestations(Attestations::find().filter(Column::SubjectId.eq(subject_id)))
            .await
    }

    async fn fetch_attestations(&self, select: Select<Attestations>) -> Result<Vec<Attestation>> {
        let records = select
            .order_by_asc(Column::SubjectId)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询考核记录失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_attestation()).collect())
    }

    pub async fn update_attestation_impl(
        &self,
        id: i64,
        patch: AttestationPatch,
    ) -> Result<Option<Attestation>> {
        let Some(existing) = Attestations::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut attestation = existing.clone().into_attestation();
        patch.merge_into(&mut attestation);

        let mut model = existing.into_active_model();
        model.subject_id = Set(attestation.subject_id);
        model.kind = Set(attestation.kind.to_string());
        model.passed = Set(attestation.passed);
        model.comment = Set(attestation.comment);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新考核记录失败: {e}")))?;

        Ok(Some(updated.into_attestation()))
    }

    pub async fn delete_attestation_impl(&self, id: i64) -> Result<bool> {
        let result = Attestations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除考核记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

//! 实验模板存储操作

use super::SeaOrmStorage;
use crate::entity::lab_submissions;
use crate::entity::lab_templates::{ActiveModel, Column, Entity as LabTemplates};
use crate::entity::prelude::LabSubmissions;
use crate::errors::{PortalError, Result};
use crate::models::{
    common::Merge,
    lab_templates::{
        entities::LabTemplate,
        requests::{CreateLabTemplateRequest, LabTemplatePatch},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn create_lab_template_impl(
        &self,
        req: CreateLabTemplateRequest,
    ) -> Result<LabTemplate> {
        let model = ActiveModel {
            subject_id: Set(req.subject_id),
            title: Set(req.title),
            description: Set(req.description),
            max_points: Set(req.max_points),
            order_number: Set(req.order_number),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建实验模板失败: {e}")))?;

        Ok(result.into_lab_template())
    }

    pub async fn get_lab_template_by_id_impl(&self, id: i64) -> Result<Option<LabTemplate>> {
        let result = LabTemplates::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询实验模板失败: {e}")))?;

        Ok(result.map(|m| m.into_lab_template()))
    }

    pub async fn list_lab_templates_impl(&self) -> Result<Vec<LabTemplate>> {
        let templates = LabTemplates::find()
            .order_by_asc(Column::SubjectId)
            .order_by_asc(Column::OrderNumber)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询实验模板失败: {e}")))?;

        Ok(templates.into_iter().map(|m| m.into_lab_template()).collect())
    }

    pub async fn list_lab_templates_by_subject_impl(
        &self,
        subject_id: i64,
    ) -> Result<Vec<LabTemplate>> {
        let templates = LabTemplates::find()
            .filter(Column::SubjectId.eq(subject_id))
            .order_by_asc(Column::OrderNumber)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询实验模板失败: {e}")))?;

        Ok(templates.into_iter().map(|m| m.into_lab_template()).collect())
    }

    pub async fn update_lab_template_impl(
        &self,
        id: i64,
        patch: LabTemplatePatch,
    ) -> Result<Option<LabTemplate>> {
        let Some(existing) = LabTemplates::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut template = existing.clone().into_lab_template();
        patch.merge_into(&mut template);

        let mut model = existing.into_active_model();
        model.subject_id = Set(template.subject_id);
        model.title = Set(template.title);
        model.description = Set(template.description);
        model.max_points = Set(template.max_points);
        model.order_number = Set(template.order_number);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新实验模板失败: {e}")))?;

        Ok(Some(updated.into_lab_template()))
    }

    /// 删除模板及其全部提交
    pub async fn delete_lab_template_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        LabSubmissions::delete_many()
            .filter(lab_submissions::Column::LabTemplateId.eq(id))
            .exec(&txn)
            .await?;

        let result = LabTemplates::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除实验模板失败: {e}")))?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

//! 实验提交存储操作

use super::SeaOrmStorage;
use crate::entity::lab_submissions::{ActiveModel, Column, Entity as LabSubmissions};
use crate::entity::lab_templates;
use crate::errors::{PortalError, Result};
use crate::models::lab_submissions::{
    entities::LabSubmission, requests::CreateLabSubmissionRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn create_lab_submission_impl(
        &self,
        req: CreateLabSubmissionRequest,
    ) -> Result<LabSubmission> {
        let model = ActiveModel {
            lab_template_id: Set(req.lab_template_id),
            student_id: Set(req.student_id),
            points: Set(req.points),
            comment: Set(req.comment),
            status: Set(req.status.unwrap_or_default().to_string()),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            graded_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建实验提交失败: {e}")))?;

        Ok(result.into_lab_submission())
    }

    pub async fn get_lab_submission_by_id_impl(&self, id: i64) -> Result<Option<LabSubmission>> {
        let result = LabSubmissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询实验提交失败: {e}")))?;

        Ok(result.map(|m| m.into_lab_submission()))
    }

    pub async fn list_lab_submissions_impl(&self) -> Result<Vec<LabSubmission>> {
        let submissions = LabSubmissions::find()
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询实验提交失败: {e}")))?;

        Ok(submissions
            .into_iter()
            .map(|m| m.into_lab_submission())
            .collect())
    }

    pub async fn list_lab_submissions_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<LabSubmission>> {
        let submissions = LabSubmissions::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询实验提交失败: {e}")))?;

        Ok(submissions
            .into_iter()
            .map(|m| m.into_lab_submission())
            .collect())
    }

    /// 通过模板关联筛选科目
    pub async fn list_lab_submissions_by_subject_impl(
        &self,
        subject_id: i64,
    ) -> Result<Vec<LabSubmission>> {
        let submissions = LabSubmissions::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::lab_submissions::Relation::LabTemplate.def(),
            )
            .filter(lab_templates::Column::SubjectId.eq(subject_id))
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询实验提交失败: {e}")))?;

        Ok(submissions
            .into_iter()
            .map(|m| m.into_lab_submission())
            .collect())
    }

    /// 按 id 整体写回（提交时间不变）
    pub async fn save_lab_submission_impl(
        &self,
        submission: LabSubmission,
    ) -> Result<Option<LabSubmission>> {
        let Some(existing) = LabSubmissions::find_by_id(submission.id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.lab_template_id = Set(submission.lab_template_id);
        model.student_id = Set(submission.student_id);
        model.points = Set(submission.points);
        model.comment = Set(submission.comment);
        model.status = Set(submission.status.to_string());
        model.graded_at = Set(submission.graded_at.map(|t| t.timestamp()));

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新实验提交失败: {e}")))?;

        Ok(Some(updated.into_lab_submission()))
    }

    /// 批量写回分数，全部成功或全部回滚
    pub async fn save_lab_submission_points_impl(
        &self,
        submissions: &[LabSubmission],
    ) -> Result<()> {
        if submissions.is_empty() {
            return Ok(());
        }

        let txn = self.db.begin().await?;
        for submission in submissions {
            LabSubmissions::update_many()
                .col_expr(
                    Column::Points,
                    sea_orm::sea_query::Expr::value(submission.points),
                )
                .filter(Column::Id.eq(submission.id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    PortalError::database_operation(format!(
                        "更新提交 {} 的分数失败: {e}",
                        submission.id
                    ))
                })?;
        }
        txn.commit().await?;

        Ok(())
    }

    pub async fn delete_lab_submission_impl(&self, id: i64) -> Result<bool> {
        let result = LabSubmissions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除实验提交失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

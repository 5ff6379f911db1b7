//! 科目与教师订阅

use super::SeaOrmStorage;
use crate::entity::prelude::{
    AttendanceRecords, Attestations, Grades, LabSubmissions, LabTemplates, TeacherSubjects,
};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::entity::{attendance, attestations, grades, lab_submissions, lab_templates, teacher_subjects};
use crate::errors::{PortalError, Result};
use crate::models::{
    common::Merge,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectPatch},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    pub async fn update_subject_impl(
        &self,
        id: i64,
        patch: SubjectPatch,
    ) -> Result<Option<Subject>> {
        let Some(existing) = Subjects::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut subject = existing.clone().into_subject();
        patch.merge_into(&mut subject);

        let mut model = existing.into_active_model();
        model.name = Set(subject.name);
        model.description = Set(subject.description);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新科目失败: {e}")))?;

        Ok(Some(updated.into_subject()))
    }

    /// 删除科目，连同模板、提交、成绩、考勤、考核和订阅
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        let template_ids: Vec<i64> = LabTemplates::find()
            .select_only()
            .column(lab_templates::Column::Id)
            .filter(lab_templates::Column::SubjectId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !template_ids.is_empty() {
            LabSubmissions::delete_many()
                .filter(lab_submissions::Column::LabTemplateId.is_in(template_ids))
                .exec(&txn)
                .await?;
        }
        LabTemplates::delete_many()
            .filter(lab_templates::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;
        Grades::delete_many()
            .filter(grades::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;
        AttendanceRecords::delete_many()
            .filter(attendance::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;
        Attestations::delete_many()
            .filter(attestations::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;
        TeacherSubjects::delete_many()
            .filter(teacher_subjects::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;

        let result = Subjects::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除科目失败: {e}")))?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// 订阅科目，已订阅返回 false
    pub async fn subscribe_teacher_impl(&self, teacher_id: i64, subject_id: i64) -> Result<bool> {
        let existing = TeacherSubjects::find()
            .filter(teacher_subjects::Column::TeacherId.eq(teacher_id))
            .filter(teacher_subjects::Column::SubjectId.eq(subject_id))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        teacher_subjects::ActiveModel {
            teacher_id: Set(teacher_id),
            subject_id: Set(subject_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| PortalError::database_operation(format!("订阅科目失败: {e}")))?;

        Ok(true)
    }

    pub async fn unsubscribe_teacher_impl(
        &self,
        teacher_id: i64,
        subject_id: i64,
    ) -> Result<bool> {
        let result = TeacherSubjects::delete_many()
            .filter(teacher_subjects::Column::TeacherId.eq(teacher_id))
            .filter(teacher_subjects::Column::SubjectId.eq(subject_id))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("取消订阅失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 教师已订阅的科目
    pub async fn list_teacher_subjects_impl(&self, teacher_id: i64) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::subjects::Relation::TeacherSubjects.def(),
            )
            .filter(teacher_subjects::Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询订阅科目失败: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }
}

//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{PortalError, Result};
use crate::models::{
    common::Merge,
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradePatch},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Select,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            subject_id: Set(req.subject_id),
            value: Set(req.value),
            description: Set(req.description),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建成绩失败: {e}")))?;

        Ok(result.into_grade())
    }

    pub async fn list_grades_impl(&self) -> Result<Vec<Grade>> {
        self.fetch_grades(Grades::find()).await
    }

    pub async fn list_grades_by_student_impl(&self, student_id: i64) -> Result<Vec<Grade>> {
        self.fetch_grades(Grades::find().filter(Column::StudentId.eq(student_id)))
            .await
    }

    pub async fn list_grades_by_subject_impl(&self, subject_id: i64) -> Result<Vec<Grade>> {
        self.fetch_grades(Grades::find().filter(Column::SubjectId.eq(subject_id)))
            .await
    }

    // 最近的成绩在前
    async fn fetch_grades(&self, select: Select<Grades>) -> Result<Vec<Grade>> {
        let grades = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    pub async fn update_grade_impl(&self, id: i64, patch: GradePatch) -> Result<Option<Grade>> {
        let Some(existing) = Grades::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut grade = existing.clone().into_grade();
        patch.merge_into(&mut grade);

        let mut model = existing.into_active_model();
        model.subject_id = Set(grade.subject_id);
        model.value = Set(grade.value);
        model.description = Set(grade.description);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新成绩失败: {e}")))?;

        Ok(Some(updated.into_grade()))
    }

    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendance::{ActiveModel, Column, DATE_FORMAT, Entity as AttendanceRecords};
use crate::errors::{PortalError, Result};
use crate::models::{
    attendance::{
        entities::Attendance,
        requests::{AttendancePatch, CreateAttendanceRequest},
    },
    common::Merge,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Select,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_attendance_impl(&self, req: CreateAttendanceRequest) -> Result<Attendance> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            subject_id: Set(req.subject_id),
            date: Set(req.date.format(DATE_FORMAT).to_string()),
            present: Set(req.present),
            note: Set(req.note),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建考勤记录失败: {e}")))?;

        Ok(result.into_attendance())
    }

    pub async fn list_attendance_impl(&self) -> Result<Vec<Attendance>> {
        self.fetch_attendance(AttendanceRecords::find()).await
    }

    pub async fn list_attendance_by_student_impl(&self, student_id: i64) -> Result<Vec<Attendance>> {
        self.fetch_attendance(AttendanceRecords::find().filter(Column::StudentId.eq(student_id)))
            .await
    }

    pub async fn list_attendance_by_subject_impl(&self, subject_id: i64) -> Result<Vec<Attendance>> {
        self.fetch_attendance(AttendanceRecords::find().filter(Column::SubjectId.eq(subject_id)))
            .await
    }

    // YYYY-MM-DD 文本按字典序即按日期排序
    async fn fetch_attendance(&self, select: Select<AttendanceRecords>) -> Result<Vec<Attendance>> {
        let records = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_attendance()).collect())
    }

    pub async fn update_attendance_impl(
        &self,
        id: i64,
        patch: AttendancePatch,
    ) -> Result<Option<Attendance>> {
        let Some(existing) = AttendanceRecords::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut record = existing.clone().into_attendance();
        patch.merge_into(&mut record);

        let mut model = existing.into_active_model();
        model.subject_id = Set(record.subject_id);
        model.date = Set(record.date.format(DATE_FORMAT).to_string());
        model.present = Set(record.present);
        model.note = Set(record.note);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新考勤记录失败: {e}")))?;

        Ok(Some(updated.into_attendance()))
    }

    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = AttendanceRecords::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除考勤记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

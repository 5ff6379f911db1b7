//! 考勤实体

use sea_orm::entity::prelude::*;

/// 日期以 `YYYY-MM-DD` 文本存储
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub date: String,
    pub present: bool,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attendance(self) -> crate::models::attendance::entities::Attendance {
        crate::models::attendance::entities::Attendance {
            id: self.id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            date: chrono::NaiveDate::parse_from_str(&self.date, DATE_FORMAT).unwrap_or_default(),
            present: self.present,
            note: self.note,
        }
    }
}

//! 实验提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lab_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lab_template_id: i64,
    pub student_id: i64,
    pub points: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub status: String,
    pub submitted_at: i64,
    pub graded_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lab_templates::Entity",
        from = "Column::LabTemplateId",
        to = "super::lab_templates::Column::Id"
    )]
    LabTemplate,
}

impl Related<super::lab_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_lab_submission(self) -> crate::models::lab_submissions::entities::LabSubmission {
        use crate::models::lab_submissions::entities::{LabSubmission, SubmissionStatus};

        LabSubmission {
            id: self.id,
            lab_template_id: self.lab_template_id,
            student_id: self.student_id,
            points: self.points,
            comment: self.comment,
            status: self.status.parse::<SubmissionStatus>().unwrap_or_default(),
            submitted_at: super::from_unix(self.submitted_at),
            graded_at: self.graded_at.map(super::from_unix),
        }
    }
}

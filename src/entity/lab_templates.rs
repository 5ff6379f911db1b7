//! 实验模板实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lab_templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub max_points: Option<i32>,
    pub order_number: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(has_many = "super::lab_submissions::Entity")]
    LabSubmissions,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::lab_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabSubmissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_lab_template(self) -> crate::models::lab_templates::entities::LabTemplate {
        crate::models::lab_templates::entities::LabTemplate {
            id: self.id,
            subject_id: self.subject_id,
            title: self.title,
            description: self.description,
            max_points: self.max_points,
            order_number: self.order_number,
            created_at: super::from_unix(self.created_at),
        }
    }
}

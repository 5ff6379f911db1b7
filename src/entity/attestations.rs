//! 考核实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attestations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    // first / second / final
    pub kind: String,
    pub passed: bool,
    pub comment: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attestation(self) -> crate::models::attestations::entities::Attestation {
        use crate::models::attestations::entities::{Attestation, AttestationType};

        Attestation {
            id: self.id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            kind: self
                .kind
                .parse::<AttestationType>()
                .unwrap_or(AttestationType::First),
            passed: self.passed,
            comment: self.comment,
            created_at: super::from_unix(self.created_at),
        }
    }
}

use super::entities::Grade;
use crate::models::common::{Merge, Patch};
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "grade.ts")]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub value: i32,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "grade.ts")]
pub struct GradePatch {
    #[serde(default)]
    #[ts(as = "Option<i64>", optional)]
    pub subject_id: Patch<i64>,
    #[serde(default)]
    #[ts(as = "Option<i32>", optional)]
    pub value: Patch<i32>,
    #[serde(default)]
    #[ts(as = "Option<String>", optional = nullable)]
    pub description: Patch<Option<String>>,
}

impl Merge<Grade> for GradePatch {
    fn merge_into(self, grade: &mut Grade) {
        self.subject_id.apply_to(&mut grade.subject_id);
        self.value.apply_to(&mut grade.value);
        self.description.apply_to(&mut grade.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_patch() {
        let mut grade = Grade {
            id: 1,
            student_id: 2,
            subject_id: 3,
            value: 4,
            description: Some("Good".to_string()),
            created_at: chrono::Utc::now(),
        };

        let patch: GradePatch = serde_json::from_str(r#"{"value": 5}"#).unwrap();
        patch.merge_into(&mut grade);
        assert_eq!(grade.value, 5);
        assert_eq!(grade.description.as_deref(), Some("Good"));

        let patch: GradePatch = serde_json::from_str(r#"{"description": null}"#).unwrap();
        patch.merge_into(&mut grade);
        assert_eq!(grade.value, 5);
        assert_eq!(grade.description, None);
    }
}

use super::entities::LabTemplate;
use crate::models::common::{Merge, Patch};
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "lab_template.ts")]
pub struct CreateLabTemplateRequest {
    pub subject_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub max_points: Option<i32>,
    #[serde(default)]
    pub order_number: i32,
}

#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "lab_template.ts")]
pub struct LabTemplatePatch {
    #[serde(default)]
    #[ts(as = "Option<i64>", optional)]
    pub subject_id: Patch<i64>,
    #[serde(default)]
    #[ts(as = "Option<String>", optional)]
    pub title: Patch<String>,
    #[serde(default)]
    #[ts(as = "Option<String>", optional = nullable)]
    pub description: Patch<Option<String>>,
    #[serde(default)]
    #[ts(as = "Option<i32>", optional = nullable)]
    pub max_points: Patch<Option<i32>>,
    #[serde(default)]
    #[ts(as = "Option<i32>", optional)]
    pub order_number: Patch<i32>,
}

impl Merge<LabTemplate> for LabTemplatePatch {
    fn merge_into(self, template: &mut LabTemplate) {
        self.subject_id.apply_to(&mut template.subject_id);
        self.title.apply_to(&mut template.title);
        self.description.apply_to(&mut template.description);
        self.max_points.apply_to(&mut template.max_points);
        self.order_number.apply_to(&mut template.order_number);
    }
}

/// 满分为空或非负
pub fn validate_max_points(max_points: Option<i32>) -> Result<(), &'static str> {
    match max_points {
        Some(max) if max < 0 => Err("Maximum points cannot be negative"),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_points_rules() {
        assert!(validate_max_points(None).is_ok());
        assert!(validate_max_points(Some(0)).is_ok());
        assert!(validate_max_points(Some(-5)).is_err());
    }

    #[test]
    fn test_patch_can_clear_maximum() {
        let mut template = LabTemplate {
            id: 1,
            subject_id: 1,
            title: "Sorting".to_string(),
            description: Some("QuickSort".to_string()),
            max_points: Some(15),
            order_number: 1,
            created_at: chrono::Utc::now(),
        };
        let patch: LabTemplatePatch =
            serde_json::from_str(r#"{"maxPoints": null, "orderNumber": 3}"#).unwrap();
        patch.merge_into(&mut template);
        assert_eq!(template.max_points, None);
        assert_eq!(template.order_number, 3);
        assert_eq!(template.description.as_deref(), Some("QuickSort"));
    }
}

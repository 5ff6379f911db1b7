use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 科目成绩
///
/// 约定取值 1..5，存储层不做限制。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "grade.ts")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub value: i32,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

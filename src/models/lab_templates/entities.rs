use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 实验模板
///
/// `max_points` 允许为空（历史数据），为空的模板不能接收提交。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "lab_template.ts")]
pub struct LabTemplate {
    pub id: i64,
    pub subject_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub max_points: Option<i32>,
    // 同一科目内的展示顺序
    pub order_number: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

use super::entities::SubmissionStatus;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "lab_submission.ts")]
pub struct CreateLabSubmissionRequest {
    pub lab_template_id: i64,
    pub student_id: i64,
    pub points: i32,
    pub comment: Option<String>,
    // 缺省为 pending
    pub status: Option<SubmissionStatus>,
}

/// 评分请求
///
/// 整体替换分数、评语和状态，`status` 缺省为 graded。
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "lab_submission.ts")]
pub struct GradeLabSubmissionRequest {
    pub points: i32,
    pub comment: Option<String>,
    pub status: Option<SubmissionStatus>,
}

use crate::grading::RepairedSubmission;
use serde::Serialize;
use ts_rs::TS;

/// 越界修复报告
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "lab_submission.ts")]
pub struct RepairReport {
    pub scanned: i64,
    pub repaired: Vec<RepairedSubmission>,
}

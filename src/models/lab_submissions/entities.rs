use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "lab_submission.ts")]
pub enum SubmissionStatus {
    #[default]
    Pending, // 待评分
    Graded,   // 已评分
    Rejected, // 已退回
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Graded => "graded",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    /// 已评分或已退回
    pub fn is_reviewed(&self) -> bool {
        matches!(self, SubmissionStatus::Graded | SubmissionStatus::Rejected)
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: pending, graded, rejected"
            ))
        })
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(SubmissionStatus::Pending),
            "graded" => Ok(SubmissionStatus::Graded),
            "rejected" => Ok(SubmissionStatus::Rejected),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

/// 实验提交
///
/// 不变量：`0 <= points <= 模板 max_points`，写入前由
/// [`validate_submission`](crate::grading::validate_submission) 保证。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "lab_submission.ts")]
pub struct LabSubmission {
    pub id: i64,
    pub lab_template_id: i64,
    pub student_id: i64,
    pub points: i32,
    pub comment: Option<String>,
    pub status: SubmissionStatus,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Pending);
        assert_eq!("GRADED".parse::<SubmissionStatus>(), Ok(SubmissionStatus::Graded));
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Rejected).unwrap(),
            r#""rejected""#
        );
        assert!(serde_json::from_str::<SubmissionStatus>(r#""lost""#).is_err());
        assert!(SubmissionStatus::Graded.is_reviewed());
        assert!(SubmissionStatus::Rejected.is_reviewed());
        assert!(!SubmissionStatus::Pending.is_reviewed());
    }
}

use super::entities::Subject;
use crate::models::common::{Merge, Patch};
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct SubjectPatch {
    #[serde(default)]
    #[ts(as = "Option<String>", optional)]
    pub name: Patch<String>,
    #[serde(default)]
    #[ts(as = "Option<String>", optional = nullable)]
    pub description: Patch<Option<String>>,
}

/// 订阅操作的目标教师，缺省为当前用户；管理员可代教师操作
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "subject.ts")]
pub struct SubscriptionQuery {
    pub teacher_id: Option<i64>,
}

impl Merge<Subject> for SubjectPatch {
    fn merge_into(self, subject: &mut Subject) {
        self.name.apply_to(&mut subject.name);
        self.description.apply_to(&mut subject.description);
    }
}

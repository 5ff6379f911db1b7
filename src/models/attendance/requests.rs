use super::entities::Attendance;
use crate::models::common::{Merge, Patch};
use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "attendance.ts")]
pub struct CreateAttendanceRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub date: NaiveDate,
    pub present: bool,
    pub note: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendancePatch {
    #[serde(default)]
    #[ts(as = "Option<i64>", optional)]
    pub subject_id: Patch<i64>,
    #[serde(default)]
    #[ts(as = "Option<NaiveDate>", optional)]
    pub date: Patch<NaiveDate>,
    #[serde(default)]
    #[ts(as = "Option<bool>", optional)]
    pub present: Patch<bool>,
    #[serde(default)]
    #[ts(as = "Option<String>", optional = nullable)]
    pub note: Patch<Option<String>>,
}

impl Merge<Attendance> for AttendancePatch {
    fn merge_into(self, attendance: &mut Attendance) {
        self.subject_id.apply_to(&mut attendance.subject_id);
        self.date.apply_to(&mut attendance.date);
        self.present.apply_to(&mut attendance.present);
        self.note.apply_to(&mut attendance.note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_format() {
        let req: CreateAttendanceRequest = serde_json::from_str(
            r#"{"studentId": 1, "subjectId": 2, "date": "2025-03-14", "present": true}"#,
        )
        .unwrap();
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert!(req.note.is_none());
    }

    #[test]
    fn test_bad_date_rejected() {
        let result = serde_json::from_str::<CreateAttendanceRequest>(
            r#"{"studentId": 1, "subjectId": 2, "date": "14.03.2025", "present": true}"#,
        );
        assert!(result.is_err());
        assert!(serde_json::from_str::<AttendancePatch>(r#"{"date": "2025-02-30"}"#).is_err());
    }

    #[test]
    fn test_patch_marks_absent() {
        let mut record = Attendance {
            id: 1,
            student_id: 1,
            subject_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            present: true,
            note: None,
        };
        let patch: AttendancePatch =
            serde_json::from_str(r#"{"present": false, "note": "sick"}"#).unwrap();
        patch.merge_into(&mut record);
        assert!(!record.present);
        assert_eq!(record.note.as_deref(), Some("sick"));
    }
}

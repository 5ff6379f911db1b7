use serde::Serialize;
use ts_rs::TS;

use crate::models::{
    attendance::entities::Attendance, attestations::entities::Attestation,
    grades::entities::Grade, lab_submissions::entities::LabSubmission,
    lab_templates::entities::LabTemplate,
};

/// 仪表盘中保留的最近成绩条数
pub const RECENT_GRADES_LIMIT: usize = 5;

/// 学生仪表盘汇总
///
/// 字段名是对外契约，前端直接绑定，不要改名。
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "dashboard.ts")]
pub struct DashboardSummary {
    pub average_grade: f64,
    pub completed_labs: i64,
    pub total_labs: i64,
    pub earned_points: i64,
    pub max_possible_points: i64,
    pub attendance_rate: f64,
    pub attestations: Vec<Attestation>,
    pub recent_grades: Vec<Grade>,
}

/// 计算学生仪表盘
///
/// 所有统计都退化为零值而不是报错：
/// - 没有成绩时平均分为 `0.0`
/// - 没有考勤记录时出勤率为 `0.0`
///
/// `completed_labs` 统计全部提交（不区分状态），`total_labs` 与
/// `max_possible_points` 按全部模板统计，不按学生所选科目过滤。
/// `recent_grades` 保持调用方给出的顺序，取前 [`RECENT_GRADES_LIMIT`] 条。
pub fn compute_dashboard(
    grades: &[Grade],
    submissions: &[LabSubmission],
    all_templates: &[LabTemplate],
    attendance: &[Attendance],
    attestations: Vec<Attestation>,
) -> DashboardSummary {
    let average_grade = if grades.is_empty() {
        0.0
    } else {
        let total: i64 = grades.iter().map(|g| i64::from(g.value)).sum();
        total as f64 / grades.len() as f64
    };

    let earned_points = submissions.iter().map(|s| i64::from(s.points)).sum();
    let max_possible_points = all_templates
        .iter()
        .map(|t| i64::from(t.max_points.unwrap_or(0)))
        .sum();

    let total_classes = attendance.len();
    let attended_classes = attendance.iter().filter(|a| a.present).count();
    let attendance_rate = if total_classes > 0 {
        attended_classes as f64 * 100.0 / total_classes as f64
    } else {
        0.0
    };

    DashboardSummary {
        average_grade,
        completed_labs: submissions.len() as i64,
        total_labs: all_templates.len() as i64,
        earned_points,
        max_possible_points,
        attendance_rate,
        attestations,
        recent_grades: grades.iter().take(RECENT_GRADES_LIMIT).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attestations::entities::AttestationType;
    use crate::models::lab_submissions::entities::SubmissionStatus;
    use chrono::{NaiveDate, Utc};

    fn grade(id: i64, value: i32) -> Grade {
        Grade {
            id,
            student_id: 1,
            subject_id: 1,
            value,
            description: None,
            created_at: Utc::now(),
        }
    }

    fn template(id: i64, max_points: Option<i32>) -> LabTemplate {
        LabTemplate {
            id,
            subject_id: 1,
            title: format!("Lab {id}"),
            description: None,
            max_points,
            order_number: id as i32,
            created_at: Utc::now(),
        }
    }

    fn submission(id: i64, points: i32, status: SubmissionStatus) -> LabSubmission {
        LabSubmission {
            id,
            lab_template_id: id,
            student_id: 1,
            points,
            comment: None,
            status,
            submitted_at: Utc::now(),
            graded_at: None,
        }
    }

    fn attendance_days(present: usize, absent: usize) -> Vec<Attendance> {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default();
        (0..present + absent)
            .map(|i| Attendance {
                id: i as i64,
                student_id: 1,
                subject_id: 1,
                date,
                present: i < present,
                note: None,
            })
            .collect()
    }

    #[test]
    fn test_average_grade_is_mean() {
        let grades = vec![grade(1, 5), grade(2, 4), grade(3, 5)];
        let summary = compute_dashboard(&grades, &[], &[], &[], vec![]);
        assert_eq!(summary.average_grade, 14.0 / 3.0);
        assert!((summary.average_grade - 4.6667).abs() < 1e-3);
    }

    #[test]
    fn test_empty_inputs_degrade_to_zero() {
        let summary = compute_dashboard(&[], &[], &[], &[], vec![]);
        assert_eq!(summary.average_grade, 0.0);
        assert_eq!(summary.attendance_rate, 0.0);
        assert_eq!(summary.completed_labs, 0);
        assert_eq!(summary.total_labs, 0);
        assert_eq!(summary.earned_points, 0);
        assert_eq!(summary.max_possible_points, 0);
        assert!(summary.recent_grades.is_empty());
    }

    #[test]
    fn test_attendance_rate() {
        let summary = compute_dashboard(&[], &[], &[], &attendance_days(17, 3), vec![]);
        assert_eq!(summary.attendance_rate, 85.0);

        let summary = compute_dashboard(&[], &[], &[], &attendance_days(0, 4), vec![]);
        assert_eq!(summary.attendance_rate, 0.0);
    }

    #[test]
    fn test_labs_counted_regardless_of_status() {
        let submissions = vec![
            submission(1, 10, SubmissionStatus::Graded),
            submission(2, 3, SubmissionStatus::Pending),
            submission(3, 0, SubmissionStatus::Rejected),
        ];
        let templates = vec![
            template(1, Some(10)),
            template(2, Some(15)),
            template(3, Some(20)),
            template(4, None),
        ];
        let summary = compute_dashboard(&[], &submissions, &templates, &[], vec![]);
        assert_eq!(summary.completed_labs, 3);
        assert_eq!(summary.total_labs, 4);
        assert_eq!(summary.earned_points, 13);
        assert_eq!(summary.max_possible_points, 45);
    }

    #[test]
    fn test_recent_grades_keep_caller_order() {
        let grades: Vec<Grade> = (1..=7).map(|i| grade(i, (i % 5 + 1) as i32)).collect();
        let summary = compute_dashboard(&grades, &[], &[], &[], vec![]);
        let ids: Vec<i64> = summary.recent_grades.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_attestations_passed_through() {
        let attestation = Attestation {
            id: 9,
            student_id: 1,
            subject_id: 2,
            kind: AttestationType::Second,
            passed: false,
            comment: Some("Not enough labs".to_string()),
            created_at: Utc::now(),
        };
        let summary = compute_dashboard(&[], &[], &[], &[], vec![attestation]);
        assert_eq!(summary.attestations.len(), 1);
        assert_eq!(summary.attestations[0].kind, AttestationType::Second);
    }

    #[test]
    fn test_serialized_field_names() {
        let summary = compute_dashboard(&[grade(1, 4)], &[], &[], &[], vec![]);
        let json = serde_json::to_value(&summary).unwrap();
        for key in [
            "averageGrade",
            "completedLabs",
            "totalLabs",
            "earnedPoints",
            "maxPossiblePoints",
            "attendanceRate",
            "attestations",
            "recentGrades",
        ] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
    }
}

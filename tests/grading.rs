use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use student_portal::grading::{
    PointsError, RepairedSubmission, compute_dashboard, repair_out_of_range_submissions,
    validate_submission,
};
use student_portal::models::attendance::entities::Attendance;
use student_portal::models::grades::entities::Grade;
use student_portal::models::lab_submissions::entities::{LabSubmission, SubmissionStatus};
use student_portal::models::lab_templates::entities::LabTemplate;

fn template(id: i64, max_points: i32) -> LabTemplate {
    LabTemplate {
        id,
        subject_id: 1,
        title: format!("Lab {id}"),
        description: None,
        max_points: Some(max_points),
        order_number: id as i32,
        created_at: Utc::now(),
    }
}

fn submission(id: i64, template_id: i64, points: i32) -> LabSubmission {
    LabSubmission {
        id,
        lab_template_id: template_id,
        student_id: 10,
        points,
        comment: None,
        status: SubmissionStatus::Graded,
        submitted_at: Utc::now(),
        graded_at: Some(Utc::now()),
    }
}

#[test]
fn rejects_points_above_lab_maximum() {
    assert_eq!(
        validate_submission(20, Some(15)),
        Err(PointsError::PointsExceedMaximum(15))
    );
    assert_eq!(validate_submission(15, Some(15)), Ok(()));
}

#[test]
fn repair_then_validate_passes() {
    let templates: HashMap<i64, LabTemplate> =
        [template(1, 15), template(2, 20)].into_iter().map(|t| (t.id, t)).collect();
    let mut submissions = vec![submission(1, 1, 20), submission(2, 2, 18)];

    let repaired = repair_out_of_range_submissions(&mut submissions, &templates);

    assert_eq!(
        repaired,
        vec![RepairedSubmission {
            id: 1,
            old_points: 20,
            new_points: 15
        }]
    );
    for s in &submissions {
        let max = templates[&s.lab_template_id].max_points;
        assert_eq!(validate_submission(s.points, max), Ok(()));
    }
}

#[test]
fn dashboard_for_typical_student() {
    let grades: Vec<Grade> = [5, 4, 5]
        .into_iter()
        .enumerate()
        .map(|(i, value)| Grade {
            id: i as i64 + 1,
            student_id: 10,
            subject_id: 1,
            value,
            description: None,
            created_at: Utc::now(),
        })
        .collect();
    let date = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
    let attendance: Vec<Attendance> = (0..20)
        .map(|i| Attendance {
            id: i,
            student_id: 10,
            subject_id: 1,
            date,
            present: i < 17,
            note: None,
        })
        .collect();
    let templates = vec![template(1, 15), template(2, 20), template(3, 10)];
    let submissions = vec![submission(1, 1, 12), submission(2, 2, 18)];

    let summary = compute_dashboard(&grades, &submissions, &templates, &attendance, vec![]);

    assert!((summary.average_grade - 4.666).abs() < 1e-2);
    assert_eq!(summary.attendance_rate, 85.0);
    assert_eq!(summary.completed_labs, 2);
    assert_eq!(summary.total_labs, 3);
    assert_eq!(summary.earned_points, 30);
    assert_eq!(summary.max_possible_points, 45);
    assert_eq!(summary.recent_grades.len(), 3);
}

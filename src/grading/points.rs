use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use ts_rs::TS;

use crate::models::{lab_submissions::entities::LabSubmission, lab_templates::entities::LabTemplate};

/// 实验提交分数校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsError {
    /// 分数为负
    NegativePoints,
    /// 分数超过模板满分，携带当前满分
    PointsExceedMaximum(i32),
    /// 模板未设置满分，无法判定
    MissingMaximum,
}

impl fmt::Display for PointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointsError::NegativePoints => write!(f, "Points cannot be negative"),
            PointsError::PointsExceedMaximum(max) => {
                write!(f, "Points cannot exceed the lab maximum ({max})")
            }
            PointsError::MissingMaximum => {
                write!(f, "Maximum points are not set for this lab template")
            }
        }
    }
}

impl std::error::Error for PointsError {}

/// 校验提交分数
///
/// 创建与重新评分走同一套规则，`max_points` 始终取模板当前的满分。
/// 负分最先判定，与模板是否设置满分无关。
pub fn validate_submission(points: i32, max_points: Option<i32>) -> Result<(), PointsError> {
    if points < 0 {
        return Err(PointsError::NegativePoints);
    }
    let max = max_points.ok_or(PointsError::MissingMaximum)?;
    if points > max {
        return Err(PointsError::PointsExceedMaximum(max));
    }
    Ok(())
}

/// 一条被修正的提交记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "lab_submission.ts")]
pub struct RepairedSubmission {
    pub id: i64,
    pub old_points: i32,
    pub new_points: i32,
}

/// 将超过模板满分的提交压回满分
///
/// 原地修改 `submissions`，返回每条修正记录。找不到模板或模板未设置满分的
/// 提交保持不变。重复执行不会产生新的修正。
pub fn repair_out_of_range_submissions(
    submissions: &mut [LabSubmission],
    templates_by_id: &HashMap<i64, LabTemplate>,
) -> Vec<RepairedSubmission> {
    let mut repaired = Vec::new();

    for submission in submissions.iter_mut() {
        let Some(max) = templates_by_id
            .get(&submission.lab_template_id)
            .and_then(|t| t.max_points)
        else {
            continue;
        };

        if submission.points > max {
            repaired.push(RepairedSubmission {
                id: submission.id,
                old_points: submission.points,
                new_points: max,
            });
            submission.points = max;
        }
    }

    repaired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lab_submissions::entities::SubmissionStatus;
    use chrono::Utc;
    use proptest::prelude::*;

    fn template(id: i64, max_points: Option<i32>) -> LabTemplate {
        LabTemplate {
            id,
            subject_id: 1,
            title: format!("Lab {id}"),
            description: None,
            max_points,
            order_number: 1,
            created_at: Utc::now(),
        }
    }

    fn submission(id: i64, template_id: i64, points: i32) -> LabSubmission {
        LabSubmission {
            id,
            lab_template_id: template_id,
            student_id: 1,
            points,
            comment: None,
            status: SubmissionStatus::Graded,
            submitted_at: Utc::now(),
            graded_at: None,
        }
    }

    fn templates(items: Vec<LabTemplate>) -> HashMap<i64, LabTemplate> {
        items.into_iter().map(|t| (t.id, t)).collect()
    }

    #[test]
    fn test_valid_points() {
        assert_eq!(validate_submission(0, Some(10)), Ok(()));
        assert_eq!(validate_submission(10, Some(10)), Ok(()));
        assert_eq!(validate_submission(0, Some(0)), Ok(()));
    }

    #[test]
    fn test_exceeding_points() {
        assert_eq!(
            validate_submission(20, Some(15)),
            Err(PointsError::PointsExceedMaximum(15))
        );
    }

    #[test]
    fn test_negative_points_checked_first() {
        assert_eq!(
            validate_submission(-1, Some(10)),
            Err(PointsError::NegativePoints)
        );
        assert_eq!(validate_submission(-1, None), Err(PointsError::NegativePoints));
    }

    #[test]
    fn test_missing_maximum() {
        assert_eq!(validate_submission(5, None), Err(PointsError::MissingMaximum));
    }

    #[test]
    fn test_error_messages_are_readable() {
        assert_eq!(
            PointsError::PointsExceedMaximum(15).to_string(),
            "Points cannot exceed the lab maximum (15)"
        );
        assert!(PointsError::NegativePoints.to_string().contains("negative"));
    }

    #[test]
    fn test_repair_clamps_to_maximum() {
        let by_id = templates(vec![template(1, Some(15)), template(2, Some(10))]);
        let mut subs = vec![submission(100, 1, 20), submission(101, 2, 7)];

        let report = repair_out_of_range_submissions(&mut subs, &by_id);

        assert_eq!(
            report,
            vec![RepairedSubmission {
                id: 100,
                old_points: 20,
                new_points: 15
            }]
        );
        assert_eq!(subs[0].points, 15);
        assert_eq!(subs[1].points, 7);
        assert_eq!(validate_submission(subs[0].points, Some(15)), Ok(()));
    }

    #[test]
    fn test_repair_skips_unknown_or_unset_templates() {
        let by_id = templates(vec![template(1, None)]);
        let mut subs = vec![submission(1, 1, 50), submission(2, 99, 50)];

        let report = repair_out_of_range_submissions(&mut subs, &by_id);

        assert!(report.is_empty());
        assert_eq!(subs[0].points, 50);
        assert_eq!(subs[1].points, 50);
    }

    #[test]
    fn test_lowered_maximum_invalidates_stored_points() {
        // 模板满分下调后，原本合法的分数在重新评分时被拒绝
        assert_eq!(validate_submission(12, Some(15)), Ok(()));
        assert_eq!(
            validate_submission(12, Some(10)),
            Err(PointsError::PointsExceedMaximum(10))
        );
    }

    proptest! {
        #[test]
        fn prop_negative_points_always_rejected(
            points in i32::MIN..0,
            max in proptest::option::of(any::<i32>()),
        ) {
            prop_assert_eq!(validate_submission(points, max), Err(PointsError::NegativePoints));
        }

        #[test]
        fn prop_points_above_maximum_rejected(max in 0i32..10_000, over in 1i32..10_000) {
            prop_assert_eq!(
                validate_submission(max + over, Some(max)),
                Err(PointsError::PointsExceedMaximum(max))
            );
        }

        #[test]
        fn prop_repair_is_idempotent(
            entries in proptest::collection::vec((0i64..5, 0i32..200), 0..40),
            maxes in proptest::collection::vec(proptest::option::of(0i32..100), 5),
        ) {
            let by_id = templates(
                maxes.iter().enumerate().map(|(i, m)| template(i as i64, *m)).collect(),
            );
            let mut subs: Vec<LabSubmission> = entries
                .iter()
                .enumerate()
                .map(|(i, (tpl, pts))| submission(i as i64, *tpl, *pts))
                .collect();

            repair_out_of_range_submissions(&mut subs, &by_id);
            let after_first: Vec<i32> = subs.iter().map(|s| s.points).collect();

            let second = repair_out_of_range_submissions(&mut subs, &by_id);
            let after_second: Vec<i32> = subs.iter().map(|s| s.points).collect();

            prop_assert!(second.is_empty());
            prop_assert_eq!(after_first, after_second);
        }
    }
}

//! 演示数据的分数生成
//!
//! 生成结果必须始终通过 [`validate_submission`](super::validate_submission)。

use rand::Rng;

/// 生成一次提交的分数：满分的 70%~100%，向下取整后再夹到 `[0, max_points]`
///
/// 浮点乘法在接近 1.0 时可能因舍入越过满分，最后一步的夹取不能省略。
pub fn generate_submission_points<R: Rng>(max_points: i32, rng: &mut R) -> i32 {
    let fraction: f64 = rng.random_range(0.7..1.0);
    let points = (f64::from(max_points) * fraction) as i32;
    points.min(max_points).max(0)
}

/// 学生完成的模板数：总数的 60%~80%
pub fn completed_lab_count<R: Rng>(total: usize, rng: &mut R) -> usize {
    let fraction: f64 = rng.random_range(0.6..0.8);
    ((total as f64 * fraction) as usize).min(total)
}

/// 按得分比例给出评语
pub fn feedback_for(points: i32, max_points: i32) -> &'static str {
    let ratio = if max_points > 0 {
        f64::from(points) / f64::from(max_points)
    } else {
        1.0
    };
    if ratio >= 0.9 {
        "Excellent!"
    } else if ratio >= 0.8 {
        "Good"
    } else {
        "Accepted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::validate_submission;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_points_in_expected_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let points = generate_submission_points(20, &mut rng);
            assert!((14..=20).contains(&points), "got {points}");
        }
    }

    #[test]
    fn test_zero_maximum() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_submission_points(0, &mut rng), 0);
    }

    #[test]
    fn test_completed_lab_count_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let count = completed_lab_count(19, &mut rng);
            assert!((11..=15).contains(&count), "got {count}");
        }
        assert_eq!(completed_lab_count(0, &mut rng), 0);
    }

    #[test]
    fn test_feedback_thresholds() {
        assert_eq!(feedback_for(10, 10), "Excellent!");
        assert_eq!(feedback_for(9, 10), "Excellent!");
        assert_eq!(feedback_for(8, 10), "Good");
        assert_eq!(feedback_for(7, 10), "Accepted");
        assert_eq!(feedback_for(0, 0), "Excellent!");
    }

    proptest! {
        #[test]
        fn prop_generated_points_always_valid(max in 1i32..100_000, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = generate_submission_points(max, &mut rng);
            prop_assert!(points >= 0 && points <= max);
            prop_assert_eq!(validate_submission(points, Some(max)), Ok(()));
        }
    }
}

//! 成绩与实验分数计算核心
//!
//! 纯计算模块，不访问存储、不持有状态，可在并发请求中直接调用。
//!
//! - `dashboard`: 学生仪表盘聚合（平均分、实验完成数、出勤率）
//! - `points`: 实验提交分数校验与越界修复
//! - `generator`: 演示数据的分数生成，保证生成结果始终通过校验

pub mod dashboard;
pub mod generator;
pub mod points;

pub use dashboard::{DashboardSummary, RECENT_GRADES_LIMIT, compute_dashboard};
pub use generator::{completed_lab_count, feedback_for, generate_submission_points};
pub use points::{
    PointsError, RepairedSubmission, repair_out_of_range_submissions, validate_submission,
};

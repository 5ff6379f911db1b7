//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 时间戳统一存为 unix 秒。

pub mod prelude;

pub mod attendance;
pub mod attestations;
pub mod grades;
pub mod lab_submissions;
pub mod lab_templates;
pub mod subjects;
pub mod teacher_subjects;
pub mod users;

use chrono::{DateTime, Utc};

pub(crate) fn from_unix(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

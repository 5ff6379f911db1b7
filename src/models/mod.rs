pub mod attendance;
pub mod attestations;
pub mod auth;
pub mod common;
pub mod grades;
pub mod lab_submissions;
pub mod lab_templates;
pub mod subjects;
pub mod users;

pub use common::{ApiResponse, PaginatedResponse, PaginationInfo, PaginationQuery, Patch};

use crate::grading::PointsError;

// 应用启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 通过 `ApiResponse.code` 返回给前端，数值一经发布不再变动。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1500,

    // 认证与用户
    AuthFailed = 2000,
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserEmailInvalid = 2003,
    UserPasswordInvalid = 2004,
    UserNameInvalid = 2005,
    CanNotDeleteCurrentUser = 2006,

    // 科目
    SubjectNotFound = 3000,
    SubjectNameInvalid = 3001,

    // 实验模板与提交
    LabTemplateNotFound = 4000,
    LabTemplateInvalid = 4001,
    LabSubmissionNotFound = 4100,
    PointsNegative = 4101,
    PointsExceedMaximum = 4102,
    MaxPointsMissing = 4103,

    // 成绩、考勤、考核
    GradeNotFound = 5000,
    AttendanceNotFound = 5100,
    AttestationNotFound = 5200,
}

impl From<PointsError> for ErrorCode {
    fn from(err: PointsError) -> Self {
        match err {
            PointsError::NegativePoints => ErrorCode::PointsNegative,
            PointsError::PointsExceedMaximum(_) => ErrorCode::PointsExceedMaximum,
            PointsError::MissingMaximum => ErrorCode::MaxPointsMissing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_error_codes() {
        assert_eq!(
            ErrorCode::from(PointsError::PointsExceedMaximum(15)) as i32,
            4102
        );
        assert_eq!(ErrorCode::from(PointsError::NegativePoints) as i32, 4101);
        assert_eq!(ErrorCode::from(PointsError::MissingMaximum) as i32, 4103);
    }
}

//! 角色权限判定
//!
//! 核心计算不感知角色，每个服务在调用存储层之前先经过 [`authorize`]。

use actix_web::{HttpRequest, HttpResponse};

use crate::middlewares::RequireJWT;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Manage,
    Subscribe,
    Repair,
}

/// 被操作的资源，带归属者的资源携带其 id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Teachers,
    Students,
    Subjects,
    /// 某位教师的科目订阅
    TeacherSubjects { teacher_id: i64 },
    LabTemplates,
    LabSubmissions,
    Grades,
    Attendance,
    Attestations,
    /// 某位学生的成绩、实验、考勤、考核与仪表盘
    StudentRecords { student_id: i64 },
}

/// 判断 `actor` 能否对 `resource` 执行 `action`
///
/// 管理员拥有全部权限；未列出的组合一律拒绝。
pub fn authorize(actor: &User, action: Action, resource: Resource) -> bool {
    use Action::*;
    use Resource::*;

    match actor.role {
        UserRole::Admin => true,
        UserRole::Teacher => match (action, resource) {
            (View, Subjects | Teachers | Students | LabTemplates | StudentRecords { .. }) => true,
            (View | Subscribe, TeacherSubjects { teacher_id }) => teacher_id == actor.id,
            (Manage, LabTemplates | LabSubmissions | Grades | Attendance | Attestations) => true,
            _ => false,
        },
        UserRole::Student => match (action, resource) {
            (View, Subjects | Teachers | LabTemplates) => true,
            (View, StudentRecords { student_id }) => student_id == actor.id,
            _ => false,
        },
    }
}

/// 取出当前用户并做权限判定，失败时给出可直接返回的响应（401 / 403）
pub fn require(
    request: &HttpRequest,
    action: Action,
    resource: Resource,
) -> Result<User, HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    if authorize(&user, action, resource) {
        Ok(user)
    } else {
        tracing::debug!(
            "User {} ({}) denied {:?} on {:?}",
            user.id,
            user.role,
            action,
            resource
        );
        Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You do not have permission to perform this action",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: i64, role: UserRole) -> User {
        User {
            id,
            email: format!("u{id}@example.com"),
            password_hash: String::new(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role,
            student_group: None,
            department: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    const MANAGED: [Resource; 5] = [
        Resource::LabTemplates,
        Resource::LabSubmissions,
        Resource::Grades,
        Resource::Attendance,
        Resource::Attestations,
    ];

    #[test]
    fn test_admin_can_do_everything() {
        let admin = user(1, UserRole::Admin);
        assert!(authorize(&admin, Action::Manage, Resource::Users));
        assert!(authorize(&admin, Action::Repair, Resource::LabSubmissions));
        assert!(authorize(
            &admin,
            Action::View,
            Resource::StudentRecords { student_id: 42 }
        ));
        assert!(authorize(
            &admin,
            Action::Subscribe,
            Resource::TeacherSubjects { teacher_id: 9 }
        ));
    }

    #[test]
    fn test_teacher_permissions() {
        let teacher = user(5, UserRole::Teacher);
        for resource in MANAGED {
            assert!(authorize(&teacher, Action::Manage, resource), "{resource:?}");
        }
        assert!(!authorize(&teacher, Action::Manage, Resource::Users));
        assert!(!authorize(&teacher, Action::Manage, Resource::Subjects));
        assert!(!authorize(&teacher, Action::Repair, Resource::LabSubmissions));
        assert!(authorize(&teacher, Action::View, Resource::Students));
        assert!(authorize(
            &teacher,
            Action::View,
            Resource::StudentRecords { student_id: 77 }
        ));
    }

    #[test]
    fn test_teacher_subscribes_only_for_self() {
        let teacher = user(5, UserRole::Teacher);
        assert!(authorize(
            &teacher,
            Action::Subscribe,
            Resource::TeacherSubjects { teacher_id: 5 }
        ));
        assert!(!authorize(
            &teacher,
            Action::Subscribe,
            Resource::TeacherSubjects { teacher_id: 6 }
        ));
    }

    #[test]
    fn test_student_sees_only_own_records() {
        let student = user(10, UserRole::Student);
        assert!(authorize(
            &student,
            Action::View,
            Resource::StudentRecords { student_id: 10 }
        ));
        assert!(!authorize(
            &student,
            Action::View,
            Resource::StudentRecords { student_id: 11 }
        ));
        assert!(authorize(&student, Action::View, Resource::Subjects));
        assert!(authorize(&student, Action::View, Resource::LabTemplates));
        assert!(!authorize(&student, Action::View, Resource::Students));
        for resource in MANAGED {
            assert!(!authorize(&student, Action::Manage, resource), "{resource:?}");
        }
    }

    #[test]
    fn test_listing_everything_is_admin_only() {
        for role in [UserRole::Teacher, UserRole::Student] {
            let actor = user(3, role);
            assert!(!authorize(&actor, Action::View, Resource::Grades));
            assert!(!authorize(&actor, Action::View, Resource::LabSubmissions));
        }
    }
}

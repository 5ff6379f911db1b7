use super::entities::{User, UserRole};
use crate::models::common::{Merge, PaginationQuery, Patch};
use serde::Deserialize;
use ts_rs::TS;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct UserListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub page: i64,
    pub size: i64,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

// 用户创建请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "user.ts")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub student_group: Option<String>,
    pub department: Option<String>,
}

// 用户更新请求，只修改出现的字段
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "user.ts")]
pub struct UserPatch {
    #[serde(default)]
    #[ts(as = "Option<String>", optional)]
    pub email: Patch<String>,
    // 请求中是明文，服务层替换为哈希后再合并
    #[serde(default)]
    #[ts(as = "Option<String>", optional)]
    pub password: Patch<String>,
    #[serde(default)]
    #[ts(as = "Option<String>", optional)]
    pub first_name: Patch<String>,
    #[serde(default)]
    #[ts(as = "Option<String>", optional)]
    pub last_name: Patch<String>,
    #[serde(default)]
    #[ts(as = "Option<UserRole>", optional)]
    pub role: Patch<UserRole>,
    #[serde(default)]
    #[ts(as = "Option<String>", optional = nullable)]
    pub student_group: Patch<Option<String>>,
    #[serde(default)]
    #[ts(as = "Option<String>", optional = nullable)]
    pub department: Patch<Option<String>>,
}

impl Merge<User> for UserPatch {
    /// `password` 此时必须已经是哈希
    fn merge_into(self, user: &mut User) {
        self.email.apply_to(&mut user.email);
        self.password.apply_to(&mut user.password_hash);
        self.first_name.apply_to(&mut user.first_name);
        self.last_name.apply_to(&mut user.last_name);
        self.role.apply_to(&mut user.role);
        self.student_group.apply_to(&mut user.student_group);
        self.department.apply_to(&mut user.department);
    }
}

/// 学生自助注册
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "user.ts")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub student_group: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            email: "t@example.com".to_string(),
            password_hash: "hash".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            role: UserRole::Teacher,
            student_group: None,
            department: Some("Informatics".to_string()),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_patch_touches_only_present_fields() {
        let patch: UserPatch =
            serde_json::from_str(r#"{"lastName": "Ivanov", "department": null}"#).unwrap();
        let mut target = user();
        patch.merge_into(&mut target);

        assert_eq!(target.first_name, "Ivan");
        assert_eq!(target.last_name, "Ivanov");
        assert_eq!(target.department, None);
        assert_eq!(target.role, UserRole::Teacher);
        assert_eq!(target.password_hash, "hash");
    }

    #[test]
    fn test_invalid_role_rejected() {
        assert!(serde_json::from_str::<UserPatch>(r#"{"role": "root"}"#).is_err());
    }
}

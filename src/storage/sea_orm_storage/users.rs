use super::SeaOrmStorage;
use crate::entity::prelude::{
    AttendanceRecords, Attestations, Grades, LabSubmissions, TeacherSubjects,
};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::entity::{attendance, attestations, grades, lab_submissions, teacher_subjects};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    common::Merge,
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UserListQuery, UserPatch},
        responses::UserListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            email: Set(req.email),
            password_hash: Set(req.password),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            role: Set(req.role.to_string()),
            student_group: Set(req.student_group),
            department: Set(req.department),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Users::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Email.contains(term))
                    .add(Column::FirstName.contains(term))
                    .add(Column::LastName.contains(term)),
            );
        }

        // 角色筛选
        if let Some(role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户总数失败: {e}")))?;

        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    /// 按角色列出用户
    pub async fn list_users_by_role_impl(&self, role: UserRole) -> Result<Vec<User>> {
        let users = Users::find()
            .filter(Column::Role.eq(role.to_string()))
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 更新用户信息
    pub async fn update_user_impl(&self, id: i64, patch: UserPatch) -> Result<Option<User>> {
        let Some(existing) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut user = existing.clone().into_user();
        patch.merge_into(&mut user);

        let mut model = existing.into_active_model();
        model.email = Set(user.email);
        model.password_hash = Set(user.password_hash);
        model.first_name = Set(user.first_name);
        model.last_name = Set(user.last_name);
        model.role = Set(user.role.to_string());
        model.student_group = Set(user.student_group);
        model.department = Set(user.department);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新用户失败: {e}")))?;

        Ok(Some(updated.into_user()))
    }

    /// 删除用户，连同其名下的全部记录
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        Grades::delete_many()
            .filter(grades::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;
        AttendanceRecords::delete_many()
            .filter(attendance::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;
        Attestations::delete_many()
            .filter(attestations::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;
        LabSubmissions::delete_many()
            .filter(lab_submissions::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;
        TeacherSubjects::delete_many()
            .filter(teacher_subjects::Column::TeacherId.eq(id))
            .exec(&txn)
            .await?;

        let result = Users::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除用户失败: {e}")))?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// 用户总数
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计用户失败: {e}")))
    }
}

//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod attestations;
mod grades;
mod lab_submissions;
mod lab_templates;
mod subjects;
mod users;

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database.url, config).await
    }

    /// 连接指定数据库并运行迁移
    pub async fn connect(url: &str, config: &AppConfig) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| PortalError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PortalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true);

        // 内存库只存在于单个连接中，连接不能被回收
        let in_memory = url.contains(":memory:");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.database.pool_size)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PortalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    attendance::{
        entities::Attendance,
        requests::{AttendancePatch, CreateAttendanceRequest},
    },
    attestations::{
        entities::Attestation,
        requests::{AttestationPatch, CreateAttestationRequest},
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradePatch},
    },
    lab_submissions::{entities::LabSubmission, requests::CreateLabSubmissionRequest},
    lab_templates::{
        entities::LabTemplate,
        requests::{CreateLabTemplateRequest, LabTemplatePatch},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectPatch},
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UserListQuery, UserPatch},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>> {
        self.list_users_by_role_impl(role).await
    }

    async fn update_user(&self, id: i64, patch: UserPatch) -> Result<Option<User>> {
        self.update_user_impl(id, patch).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn update_subject(&self, id: i64, patch: SubjectPatch) -> Result<Option<Subject>> {
        self.update_subject_impl(id, patch).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn subscribe_teacher(&self, teacher_id: i64, subject_id: i64) -> Result<bool> {
        self.subscribe_teacher_impl(teacher_id, subject_id).await
    }

    async fn unsubscribe_teacher(&self, teacher_id: i64, subject_id: i64) -> Result<bool> {
        self.unsubscribe_teacher_impl(teacher_id, subject_id).await
    }

    async fn list_teacher_subjects(&self, teacher_id: i64) -> Result<Vec<Subject>> {
        self.list_teacher_subjects_impl(teacher_id).await
    }

    // 实验模板模块
    async fn create_lab_template(
        &self,
        template: CreateLabTemplateRequest,
    ) -> Result<LabTemplate> {
        self.create_lab_template_impl(template).await
    }

    async fn get_lab_template_by_id(&self, id: i64) -> Result<Option<LabTemplate>> {
        self.get_lab_template_by_id_impl(id).await
    }

    async fn list_lab_templates(&self) -> Result<Vec<LabTemplate>> {
        self.list_lab_templates_impl().await
    }

    async fn list_lab_templates_by_subject(&self, subject_id: i64) -> Result<Vec<LabTemplate>> {
        self.list_lab_templates_by_subject_impl(subject_id).await
    }

    async fn update_lab_template(
        &self,
        id: i64,
        patch: LabTemplatePatch,
    ) -> Result<Option<LabTemplate>> {
        self.update_lab_template_impl(id, patch).await
    }

    async fn delete_lab_template(&self, id: i64) -> Result<bool> {
        self.delete_lab_template_impl(id).await
    }

    // 实验提交模块
    async fn create_lab_submission(
        &self,
        submission: CreateLabSubmissionRequest,
    ) -> Result<LabSubmission> {
        self.create_lab_submission_impl(submission).await
    }

    async fn get_lab_submission_by_id(&self, id: i64) -> Result<Option<LabSubmission>> {
        self.get_lab_submission_by_id_impl(id).await
    }

    async fn list_lab_submissions(&self) -> Result<Vec<LabSubmission>> {
        self.list_lab_submissions_impl().await
    }

    async fn list_lab_submissions_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<LabSubmission>> {
        self.list_lab_submissions_by_student_impl(student_id).await
    }

    async fn list_lab_submissions_by_subject(
        &self,
        subject_id: i64,
    ) -> Result<Vec<LabSubmission>> {
        self.list_lab_submissions_by_subject_impl(subject_id).await
    }

    async fn save_lab_submission(
        &self,
        submission: LabSubmission,
    ) -> Result<Option<LabSubmission>> {
        self.save_lab_submission_impl(submission).await
    }

    async fn save_lab_submission_points(&self, submissions: &[LabSubmission]) -> Result<()> {
        self.save_lab_submission_points_impl(submissions).await
    }

    async fn delete_lab_submission(&self, id: i64) -> Result<bool> {
        self.delete_lab_submission_impl(id).await
    }

    // 成绩模块
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn list_grades(&self) -> Result<Vec<Grade>> {
        self.list_grades_impl().await
    }

    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>> {
        self.list_grades_by_student_impl(student_id).await
    }

    async fn list_grades_by_subject(&self, subject_id: i64) -> Result<Vec<Grade>> {
        self.list_grades_by_subject_impl(subject_id).await
    }

    async fn update_grade(&self, id: i64, patch: GradePatch) -> Result<Option<Grade>> {
        self.update_grade_impl(id, patch).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    // 考勤模块
    async fn create_attendance(&self, record: CreateAttendanceRequest) -> Result<Attendance> {
        self.create_attendance_impl(record).await
    }

    async fn list_attendance(&self) -> Result<Vec<Attendance>> {
        self.list_attendance_impl().await
    }

    async fn list_attendance_by_student(&self, student_id: i64) -> Result<Vec<Attendance>> {
        self.list_attendance_by_student_impl(student_id).await
    }

    async fn list_attendance_by_subject(&self, subject_id: i64) -> Result<Vec<Attendance>> {
        self.list_attendance_by_subject_impl(subject_id).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        patch: AttendancePatch,
    ) -> Result<Option<Attendance>> {
        self.update_attendance_impl(id, patch).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }

    // 考核模块
    async fn create_attestation(
        &self,
        attestation: CreateAttestationRequest,
    ) -> Result<Attestation> {
        self.create_attestation_impl(attestation).await
    }

    async fn list_attestations(&self) -> Result<Vec<Attestation>> {
        self.list_attestations_impl().await
    }

    async fn list_attestations_by_student(&self, student_id: i64) -> Result<Vec<Attestation>> {
        self.list_attestations_by_student_impl(student_id).await
    }

    async fn list_attestations_by_subject(&self, subject_id: i64) -> Result<Vec<Attestation>> {
        self.list_attestations_by_subject_impl(subject_id).await
    }

    async fn update_attestation(
        &self,
        id: i64,
        patch: AttestationPatch,
    ) -> Result<Option<Attestation>> {
        self.update_attestation_impl(id, patch).await
    }

    async fn delete_attestation(&self, id: i64) -> Result<bool> {
        self.delete_attestation_impl(id).await
    }
}

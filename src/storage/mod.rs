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

use crate::errors::Result;

pub mod sea_orm_storage;

pub use sea_orm_storage::SeaOrmStorage;

/// 持久化接口
///
/// 更新方法接收 `*Patch`，实现方读出实体、调用 `Merge::merge_into`、整体写回；
/// 记录不存在时返回 `Ok(None)` / `Ok(false)`，由服务层映射为 404。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段已是哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 分页列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 按角色列出用户
    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, patch: UserPatch) -> Result<Option<User>>;
    // 删除用户及其成绩、考勤、考核、提交和科目订阅
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    async fn update_subject(&self, id: i64, patch: SubjectPatch) -> Result<Option<Subject>>;
    // 删除科目及其下的模板、提交、成绩、考勤、考核和订阅
    async fn delete_subject(&self, id: i64) -> Result<bool>;
    // 教师订阅科目，已订阅时返回 false
    async fn subscribe_teacher(&self, teacher_id: i64, subject_id: i64) -> Result<bool>;
    async fn unsubscribe_teacher(&self, teacher_id: i64, subject_id: i64) -> Result<bool>;
    async fn list_teacher_subjects(&self, teacher_id: i64) -> Result<Vec<Subject>>;

    /// 实验模板方法
    async fn create_lab_template(&self, template: CreateLabTemplateRequest)
    -> Result<LabTemplate>;
    async fn get_lab_template_by_id(&self, id: i64) -> Result<Option<LabTemplate>>;
    // 全部模板，按科目、序号排序
    async fn list_lab_templates(&self) -> Result<Vec<LabTemplate>>;
    // 科目下的模板，按序号升序
    async fn list_lab_templates_by_subject(&self, subject_id: i64) -> Result<Vec<LabTemplate>>;
    async fn update_lab_template(
        &self,
        id: i64,
        patch: LabTemplatePatch,
    ) -> Result<Option<LabTemplate>>;
    // 删除模板及其提交
    async fn delete_lab_template(&self, id: i64) -> Result<bool>;

    /// 实验提交方法
    async fn create_lab_submission(
        &self,
        submission: CreateLabSubmissionRequest,
    ) -> Result<LabSubmission>;
    async fn get_lab_submission_by_id(&self, id: i64) -> Result<Option<LabSubmission>>;
    async fn list_lab_submissions(&self) -> Result<Vec<LabSubmission>>;
    async fn list_lab_submissions_by_student(&self, student_id: i64)
    -> Result<Vec<LabSubmission>>;
    async fn list_lab_submissions_by_subject(&self, subject_id: i64)
    -> Result<Vec<LabSubmission>>;
    // 按 id 整体写回，记录不存在时返回 None
    async fn save_lab_submission(&self, submission: LabSubmission)
    -> Result<Option<LabSubmission>>;
    // 在同一事务中写回多条提交的分数
    async fn save_lab_submission_points(&self, submissions: &[LabSubmission]) -> Result<()>;
    async fn delete_lab_submission(&self, id: i64) -> Result<bool>;

    /// 成绩方法（学生维度按创建时间倒序）
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    async fn list_grades(&self) -> Result<Vec<Grade>>;
    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>>;
    async fn list_grades_by_subject(&self, subject_id: i64) -> Result<Vec<Grade>>;
    async fn update_grade(&self, id: i64, patch: GradePatch) -> Result<Option<Grade>>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 考勤方法（按日期倒序）
    async fn create_attendance(&self, record: CreateAttendanceRequest) -> Result<Attendance>;
    async fn list_attendance(&self) -> Result<Vec<Attendance>>;
    async fn list_attendance_by_student(&self, student_id: i64) -> Result<Vec<Attendance>>;
    async fn list_attendance_by_subject(&self, subject_id: i64) -> Result<Vec<Attendance>>;
    async fn update_attendance(
        &self,
        id: i64,
        patch: AttendancePatch,
    ) -> Result<Option<Attendance>>;
    async fn delete_attendance(&self, id: i64) -> Result<bool>;

    /// 考核方法
    async fn create_attestation(&self, attestation: CreateAttestationRequest)
    -> Result<Attestation>;
    async fn list_attestations(&self) -> Result<Vec<Attestation>>;
    async fn list_attestations_by_student(&self, student_id: i64) -> Result<Vec<Attestation>>;
    async fn list_attestations_by_subject(&self, subject_id: i64) -> Result<Vec<Attestation>>;
    async fn update_attestation(
        &self,
        id: i64,
        patch: AttestationPatch,
    ) -> Result<Option<Attestation>>;
    async fn delete_attestation(&self, id: i64) -> Result<bool>;
}

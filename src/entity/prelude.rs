//! 预导入模块，方便使用

pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as AttendanceRecords, Model as AttendanceModel,
};
pub use super::attestations::{
    ActiveModel as AttestationActiveModel, Entity as Attestations, Model as AttestationModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::lab_submissions::{
    ActiveModel as LabSubmissionActiveModel, Entity as LabSubmissions, Model as LabSubmissionModel,
};
pub use super::lab_templates::{
    ActiveModel as LabTemplateActiveModel, Entity as LabTemplates, Model as LabTemplateModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teacher_subjects::{
    ActiveModel as TeacherSubjectActiveModel, Entity as TeacherSubjects,
    Model as TeacherSubjectModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};

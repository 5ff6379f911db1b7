use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use student_portal::config::{AppConfig, SeedConfig};
use student_portal::grading::validate_submission;
use student_portal::models::attendance::requests::CreateAttendanceRequest;
use student_portal::models::grades::requests::{CreateGradeRequest, GradePatch};
use student_portal::models::lab_submissions::requests::CreateLabSubmissionRequest;
use student_portal::models::lab_templates::requests::{
    CreateLabTemplateRequest, LabTemplatePatch,
};
use student_portal::models::subjects::requests::CreateSubjectRequest;
use student_portal::models::users::entities::{User, UserRole};
use student_portal::models::users::requests::CreateUserRequest;
use student_portal::runtime::lifetime::seed::{seed_demo_data, seed_if_empty};
use student_portal::services::lab_submissions::repair_submissions;
use student_portal::services::students::dashboard::build_dashboard;
use student_portal::storage::{SeaOrmStorage, Storage};

async fn memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::connect("sqlite::memory:", AppConfig::get())
        .await
        .unwrap()
}

async fn user(storage: &SeaOrmStorage, email: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            email: email.to_string(),
            password: "not-a-real-hash".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role,
            student_group: None,
            department: None,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn seed_runs_only_on_empty_database() {
    let storage = memory_storage().await;
    let config = SeedConfig {
        demo_data: false,
        repair_on_startup: false,
        admin_email: "root@example.com".to_string(),
    };

    assert!(seed_if_empty(&storage, &config).await.unwrap());
    assert!(!seed_if_empty(&storage, &config).await.unwrap());
    assert_eq!(storage.count_users().await.unwrap(), 1);

    let admin = storage
        .get_user_by_email("root@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(admin.role, UserRole::Admin);
}

#[tokio::test]
async fn demo_data_respects_lab_maximums() {
    let storage = memory_storage().await;
    let mut rng = StdRng::seed_from_u64(2025);
    seed_demo_data(&storage, &mut rng).await.unwrap();

    assert_eq!(storage.list_users_by_role(UserRole::Teacher).await.unwrap().len(), 3);
    assert_eq!(storage.list_users_by_role(UserRole::Student).await.unwrap().len(), 4);
    assert_eq!(storage.list_lab_templates().await.unwrap().len(), 19);

    let templates = storage.list_lab_templates().await.unwrap();
    for s in storage.list_lab_submissions().await.unwrap() {
        let max = templates
            .iter()
            .find(|t| t.id == s.lab_template_id)
            .and_then(|t| t.max_points);
        assert_eq!(validate_submission(s.points, max), Ok(()));
    }

    let report = repair_submissions(&storage).await.unwrap();
    assert!(report.repaired.is_empty());
}

#[tokio::test]
async fn repair_clamps_after_maximum_is_lowered() {
    let storage = memory_storage().await;
    let student = user(&storage, "s@example.com", UserRole::Student).await;
    let subject = storage
        .create_subject(CreateSubjectRequest {
            name: "Algorithms".to_string(),
            description: None,
        })
        .await
        .unwrap();
    let template = storage
        .create_lab_template(CreateLabTemplateRequest {
            subject_id: subject.id,
            title: "Sorting".to_string(),
            description: None,
            max_points: Some(20),
            order_number: 1,
        })
        .await
        .unwrap();
    let submission = storage
        .create_lab_submission(CreateLabSubmissionRequest {
            lab_template_id: template.id,
            student_id: student.id,
            points: 20,
            comment: None,
            status: None,
        })
        .await
        .unwrap();

    let lowered: LabTemplatePatch = serde_json::from_str(r#"{"maxPoints": 15}"#).unwrap();
    storage
        .update_lab_template(template.id, lowered)
        .await
        .unwrap()
        .unwrap();

    let report = repair_submissions(&storage).await.unwrap();
    assert_eq!(report.scanned, 1);
    assert_eq!(report.repaired.len(), 1);
    assert_eq!(report.repaired[0].old_points, 20);
    assert_eq!(report.repaired[0].new_points, 15);

    let stored = storage
        .get_lab_submission_by_id(submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.points, 15);

    let again = repair_submissions(&storage).await.unwrap();
    assert!(again.repaired.is_empty());
}

#[tokio::test]
async fn patch_null_clears_optional_field() {
    let storage = memory_storage().await;
    let student = user(&storage, "g@example.com", UserRole::Student).await;
    let subject = storage
        .create_subject(CreateSubjectRequest {
            name: "Databases".to_string(),
            description: None,
        })
        .await
        .unwrap();
    let grade = storage
        .create_grade(CreateGradeRequest {
            student_id: student.id,
            subject_id: subject.id,
            value: 4,
            description: Some("Midterm".to_string()),
        })
        .await
        .unwrap();

    let patch: GradePatch = serde_json::from_str(r#"{"description": null}"#).unwrap();
    let updated = storage.update_grade(grade.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.value, 4);
    assert_eq!(updated.description, None);

    let missing = storage.update_grade(9999, GradePatch::default()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn deleting_student_removes_their_records() {
    let storage = memory_storage().await;
    let student = user(&storage, "d@example.com", UserRole::Student).await;
    let subject = storage
        .create_subject(CreateSubjectRequest {
            name: "Web".to_string(),
            description: None,
        })
        .await
        .unwrap();
    storage
        .create_grade(CreateGradeRequest {
            student_id: student.id,
            subject_id: subject.id,
            value: 5,
            description: None,
        })
        .await
        .unwrap();
    storage
        .create_attendance(CreateAttendanceRequest {
            student_id: student.id,
            subject_id: subject.id,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            present: true,
            note: None,
        })
        .await
        .unwrap();

    let before = build_dashboard(&storage, student.id).await.unwrap();
    assert_eq!(before.average_grade, 5.0);
    assert_eq!(before.attendance_rate, 100.0);

    assert!(storage.delete_user(student.id).await.unwrap());
    assert!(storage.get_user_by_id(student.id).await.unwrap().is_none());
    assert!(storage.list_grades_by_student(student.id).await.unwrap().is_empty());
    assert!(
        storage
            .list_attendance_by_student(student.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(!storage.delete_user(student.id).await.unwrap());
}

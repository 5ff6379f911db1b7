//! 初始数据
//!
//! 只在库中没有任何用户时写入：管理员账号，以及可选的演示数据。

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::SeedConfig;
use crate::errors::Result;
use crate::grading::{completed_lab_count, feedback_for, generate_submission_points};
use crate::models::attendance::requests::CreateAttendanceRequest;
use crate::models::attestations::{entities::AttestationType, requests::CreateAttestationRequest};
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::lab_submissions::{
    entities::SubmissionStatus, requests::CreateLabSubmissionRequest,
};
use crate::models::lab_templates::requests::CreateLabTemplateRequest;
use crate::models::subjects::{entities::Subject, requests::CreateSubjectRequest};
use crate::models::users::entities::{User, UserRole};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;

const DEMO_TEACHER_PASSWORD: &str = "Teacher2025";
const DEMO_STUDENT_PASSWORD: &str = "Student2025";

/// 每位学生的考勤天数
const ATTENDANCE_DAYS: i64 = 20;

/// 库为空时写入初始数据，返回是否写入
///
/// 非空库上重复调用不做任何事。
pub async fn seed_if_empty(storage: &dyn Storage, config: &SeedConfig) -> Result<bool> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!("Database already has {} user(s), skipping seed", count);
        return Ok(false);
    }

    info!("No users found in database, seeding initial data...");
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let admin = storage
        .create_user(CreateUserRequest {
            email: config.admin_email.clone(),
            password: hash_password(&password)?,
            first_name: "System".to_string(),
            last_name: "Administrator".to_string(),
            role: UserRole::Admin,
            student_group: None,
            department: None,
        })
        .await?;
    info!("Admin account created (ID: {}, email: {})", admin.id, admin.email);

    if config.demo_data {
        let mut rng = StdRng::from_os_rng();
        seed_demo_data(storage, &mut rng).await?;
    }

    Ok(true)
}

fn generate_random_password(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

struct DemoTemplate {
    title: &'static str,
    description: &'static str,
    max_points: i32,
}

const fn lab(title: &'static str, description: &'static str, max_points: i32) -> DemoTemplate {
    DemoTemplate {
        title,
        description,
        max_points,
    }
}

const PROGRAMMING_LABS: [DemoTemplate; 5] = [
    lab("Lab 1: Language basics", "Syntax, variables and data types", 10),
    lab("Lab 2: Object-oriented design", "Classes, objects, inheritance, polymorphism", 15),
    lab("Lab 3: Collections", "Lists, maps and sets", 15),
    lab("Lab 4: Error handling", "Exceptions and custom error types", 10),
    lab("Lab 5: Concurrency", "Threads, executors and synchronization", 20),
];

const ALGORITHMS_LABS: [DemoTemplate; 4] = [
    lab("Lab 1: Sorting", "QuickSort, MergeSort, HeapSort", 15),
    lab("Lab 2: Searching", "Binary search, depth-first and breadth-first search", 15),
    lab("Lab 3: Graphs", "Graph representations and traversal", 20),
    lab("Lab 4: Dynamic programming", "Knapsack, LCS, Fibonacci", 20),
];

const DATABASES_LABS: [DemoTemplate; 5] = [
    lab("Lab 1: SQL basics", "SELECT, JOIN, GROUP BY, aggregate functions", 10),
    lab("Lab 2: Database design", "ER diagrams and normalization", 15),
    lab("Lab 3: Indexes and performance", "Creating indexes, query optimization", 15),
    lab("Lab 4: Transactions", "ACID and isolation levels", 15),
    lab("Lab 5: NoSQL", "Document and key-value stores compared with SQL", 15),
];

const WEB_LABS: [DemoTemplate; 5] = [
    lab("Lab 1: HTML/CSS", "Page layout, Flexbox, Grid", 10),
    lab("Lab 2: JavaScript", "ES6+, DOM manipulation, events", 15),
    lab("Lab 3: Frontend framework", "Components, hooks, state", 20),
    lab("Lab 4: REST API backend", "Controllers, repositories, routing", 20),
    lab("Lab 5: Full-stack application", "Integrating frontend and backend", 25),
];

async fn demo_user(
    storage: &dyn Storage,
    password_hash: &str,
    email: &str,
    name: (&str, &str),
    role: UserRole,
    group_or_department: &str,
) -> Result<User> {
    let (student_group, department) = match role {
        UserRole::Student => (Some(group_or_department.to_string()), None),
        _ => (None, Some(group_or_department.to_string())),
    };
    storage
        .create_user(CreateUserRequest {
            email: email.to_string(),
            password: password_hash.to_string(),
            first_name: name.0.to_string(),
            last_name: name.1.to_string(),
            role,
            student_group,
            department,
        })
        .await
}

async fn demo_subject(
    storage: &dyn Storage,
    name: &str,
    description: &str,
    labs: &[DemoTemplate],
) -> Result<Subject> {
    let subject = storage
        .create_subject(CreateSubjectRequest {
            name: name.to_string(),
            description: Some(description.to_string()),
        })
        .await?;

    for (index, template) in labs.iter().enumerate() {
        storage
            .create_lab_template(CreateLabTemplateRequest {
                subject_id: subject.id,
                title: template.title.to_string(),
                description: Some(template.description.to_string()),
                max_points: Some(template.max_points),
                order_number: index as i32 + 1,
            })
            .await?;
    }
    Ok(subject)
}

/// 演示数据：3 位教师、4 名学生、4 门科目及其实验、提交、成绩、考勤与考核
pub async fn seed_demo_data<R: Rng>(storage: &dyn Storage, rng: &mut R) -> Result<()> {
    let teacher_hash = hash_password(DEMO_TEACHER_PASSWORD)?;
    let student_hash = hash_password(DEMO_STUDENT_PASSWORD)?;

    let teacher1 = demo_user(
        storage,
        &teacher_hash,
        "teacher@example.com",
        ("Ivan", "Petrov"),
        UserRole::Teacher,
        "Department of Computer Science",
    )
    .await?;
    let teacher2 = demo_user(
        storage,
        &teacher_hash,
        "teacher2@example.com",
        ("Maria", "Ivanova"),
        UserRole::Teacher,
        "Department of Mathematics",
    )
    .await?;
    let teacher3 = demo_user(
        storage,
        &teacher_hash,
        "teacher3@example.com",
        ("Dmitry", "Smirnov"),
        UserRole::Teacher,
        "Department of Physics",
    )
    .await?;

    let mut students = Vec::with_capacity(4);
    for (email, name, group) in [
        ("student@example.com", ("Anna", "Sidorova"), "SE-201"),
        ("student2@example.com", ("Petr", "Kozlov"), "SE-201"),
        ("student3@example.com", ("Elena", "Morozova"), "SE-202"),
        ("student4@example.com", ("Alexey", "Novikov"), "SE-202"),
    ] {
        students
            .push(demo_user(storage, &student_hash, email, name, UserRole::Student, group).await?);
    }

    let programming = demo_subject(
        storage,
        "Programming",
        "Programming fundamentals",
        &PROGRAMMING_LABS,
    )
    .await?;
    let algorithms = demo_subject(
        storage,
        "Algorithms and Data Structures",
        "Core algorithms and data structures",
        &ALGORITHMS_LABS,
    )
    .await?;
    let databases = demo_subject(
        storage,
        "Databases",
        "Database design and development",
        &DATABASES_LABS,
    )
    .await?;
    let webdev = demo_subject(
        storage,
        "Web Development",
        "Building modern web applications",
        &WEB_LABS,
    )
    .await?;

    for (teacher, subject) in [
        (&teacher1, &programming),
        (&teacher1, &webdev),
        (&teacher2, &algorithms),
        (&teacher3, &databases),
    ] {
        storage.subscribe_teacher(teacher.id, subject.id).await?;
    }

    // 每名学生按模板顺序完成前 60%~80%
    let templates = storage.list_lab_templates().await?;
    for student in &students {
        let completed = completed_lab_count(templates.len(), rng);
        for template in templates.iter().take(completed) {
            let max_points = template.max_points.unwrap_or(0);
            let points = generate_submission_points(max_points, rng);
            let mut submission = storage
                .create_lab_submission(CreateLabSubmissionRequest {
                    lab_template_id: template.id,
                    student_id: student.id,
                    points,
                    comment: Some(feedback_for(points, max_points).to_string()),
                    status: Some(SubmissionStatus::Graded),
                })
                .await?;
            submission.graded_at = Some(Utc::now() - Duration::days(rng.random_range(0..20)));
            storage.save_lab_submission(submission).await?;
        }
    }

    for (student, subject, value, description) in [
        (&students[0], &programming, 5, "Excellent work"),
        (&students[0], &algorithms, 4, "Good"),
        (&students[1], &programming, 4, "Well done"),
        (&students[1], &databases, 5, "Outstanding"),
        (&students[2], &webdev, 5, "Excellent project"),
        (&students[3], &algorithms, 3, "Satisfactory"),
    ] {
        storage
            .create_grade(CreateGradeRequest {
                student_id: student.id,
                subject_id: subject.id,
                value,
                description: Some(description.to_string()),
            })
            .await?;
    }

    // 最近 20 天，科目轮换，约 85% 出勤
    let today = Utc::now().date_naive();
    let rotation = [&programming, &algorithms, &databases, &webdev];
    for student in &students {
        for day in 0..ATTENDANCE_DAYS {
            storage
                .create_attendance(CreateAttendanceRequest {
                    student_id: student.id,
                    subject_id: rotation[day as usize % rotation.len()].id,
                    date: today - Duration::days(day),
                    present: rng.random_bool(0.85),
                    note: None,
                })
                .await?;
        }
    }

    for (student, subject, kind, passed, comment) in [
        (&students[0], &programming, AttestationType::First, true, "Admitted"),
        (&students[0], &programming, AttestationType::Second, true, "Admitted"),
        (&students[0], &algorithms, AttestationType::First, true, "Admitted"),
        (&students[1], &programming, AttestationType::First, true, "Admitted"),
        (&students[1], &databases, AttestationType::First, true, "Admitted"),
        (&students[1], &databases, AttestationType::Second, true, "Admitted"),
        (&students[2], &webdev, AttestationType::First, true, "Admitted"),
        (&students[2], &webdev, AttestationType::Second, true, "Admitted"),
        (&students[3], &algorithms, AttestationType::First, false, "Not enough labs"),
    ] {
        storage
            .create_attestation(CreateAttestationRequest {
                student_id: student.id,
                subject_id: subject.id,
                kind,
                passed,
                comment: Some(comment.to_string()),
            })
            .await?;
    }

    warn!(
        "Demo data created: 3 teachers (password {}), 4 students (password {}), {} lab templates",
        DEMO_TEACHER_PASSWORD,
        DEMO_STUDENT_PASSWORD,
        templates.len()
    );
    Ok(())
}

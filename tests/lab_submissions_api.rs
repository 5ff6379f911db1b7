use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use student_portal::cache::{MokaCacheWrapper, ObjectCache};
use student_portal::config::AppConfig;
use student_portal::models::ErrorCode;
use student_portal::models::lab_templates::requests::CreateLabTemplateRequest;
use student_portal::models::subjects::requests::CreateSubjectRequest;
use student_portal::models::users::entities::{User, UserRole};
use student_portal::models::users::requests::CreateUserRequest;
use student_portal::routes;
use student_portal::storage::{SeaOrmStorage, Storage};
use student_portal::utils::jwt::JwtUtils;

struct Fixture {
    storage: Arc<dyn Storage>,
    teacher_token: String,
    student_token: String,
    student_id: i64,
    subject_id: i64,
}

async fn user(storage: &dyn Storage, email: &str, role: UserRole) -> User {
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

fn token(user: &User) -> String {
    JwtUtils::generate_access_token(user.id, user.role.as_str()).unwrap()
}

async fn fixture() -> Fixture {
    let storage: Arc<dyn Storage> = Arc::new(
        SeaOrmStorage::connect("sqlite::memory:", AppConfig::get())
            .await
            .unwrap(),
    );
    let teacher = user(storage.as_ref(), "teacher@example.com", UserRole::Teacher).await;
    let student = user(storage.as_ref(), "student@example.com", UserRole::Student).await;
    let subject = storage
        .create_subject(CreateSubjectRequest {
            name: "Algorithms".to_string(),
            description: None,
        })
        .await
        .unwrap();

    Fixture {
        teacher_token: token(&teacher),
        student_token: token(&student),
        student_id: student.id,
        subject_id: subject.id,
        storage,
    }
}

async fn template(fx: &Fixture, max_points: Option<i32>) -> i64 {
    fx.storage
        .create_lab_template(CreateLabTemplateRequest {
            subject_id: fx.subject_id,
            title: "Sorting".to_string(),
            description: None,
            max_points,
            order_number: 1,
        })
        .await
        .unwrap()
        .id
}

async fn call(fx: &Fixture, request: test::TestRequest, token: &str) -> (StatusCode, Value) {
    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_capacity(64, 60));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(fx.storage.clone()))
            .app_data(web::Data::new(cache))
            .configure(routes::configure_api_routes),
    )
    .await;

    let request = request
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let response = test::call_service(&app, request).await;
    let status = response.status();
    let body: Value = test::read_body_json(response).await;
    (status, body)
}

async fn submit(fx: &Fixture, template_id: i64, points: i32, token: &str) -> (StatusCode, Value) {
    let request = test::TestRequest::post()
        .uri("/api/v1/lab-submissions")
        .set_json(json!({
            "labTemplateId": template_id,
            "studentId": fx.student_id,
            "points": points,
        }));
    call(fx, request, token).await
}

async fn regrade(fx: &Fixture, submission_id: i64, body: Value) -> (StatusCode, Value) {
    let request = test::TestRequest::put()
        .uri(&format!("/api/v1/lab-submissions/{submission_id}"))
        .set_json(body);
    call(fx, request, &fx.teacher_token).await
}

#[actix_web::test]
async fn create_rejects_points_above_maximum() {
    let fx = fixture().await;
    let template_id = template(&fx, Some(10)).await;

    let (status, body) = submit(&fx, template_id, 12, &fx.teacher_token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::PointsExceedMaximum as i32);
    assert_eq!(body["message"], "Points cannot exceed the lab maximum (10)");

    let (status, body) = submit(&fx, template_id, 10, &fx.teacher_token).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["points"], 10);
    assert_eq!(body["data"]["status"], "pending");
}

#[actix_web::test]
async fn create_rejects_negative_points() {
    let fx = fixture().await;
    let template_id = template(&fx, Some(10)).await;

    let (status, body) = submit(&fx, template_id, -1, &fx.teacher_token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::PointsNegative as i32);
}

#[actix_web::test]
async fn create_requires_template_maximum() {
    let fx = fixture().await;
    let template_id = template(&fx, None).await;

    let (status, body) = submit(&fx, template_id, 5, &fx.teacher_token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::MaxPointsMissing as i32);
}

#[actix_web::test]
async fn create_with_unknown_template_is_not_found() {
    let fx = fixture().await;

    let (status, body) = submit(&fx, 9999, 5, &fx.teacher_token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::LabTemplateNotFound as i32);
}

#[actix_web::test]
async fn student_cannot_create_submission() {
    let fx = fixture().await;
    let template_id = template(&fx, Some(10)).await;

    let (status, body) = submit(&fx, template_id, 5, &fx.student_token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], ErrorCode::Forbidden as i32);
    assert!(
        fx.storage
            .list_lab_submissions()
            .await
            .unwrap()
            .is_empty()
    );
}

#[actix_web::test]
async fn regrade_checks_current_maximum() {
    let fx = fixture().await;
    let template_id = template(&fx, Some(20)).await;

    let (status, body) = submit(&fx, template_id, 15, &fx.teacher_token).await;
    assert_eq!(status, StatusCode::CREATED);
    let submission_id = body["data"]["id"].as_i64().unwrap();

    let lower = test::TestRequest::put()
        .uri(&format!("/api/v1/lab-templates/{template_id}"))
        .set_json(json!({ "maxPoints": 10 }));
    let (status, body) = call(&fx, lower, &fx.teacher_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["maxPoints"], 10);

    let (status, body) = regrade(&fx, submission_id, json!({ "points": 15 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::PointsExceedMaximum as i32);
    assert_eq!(body["message"], "Points cannot exceed the lab maximum (10)");

    let (status, body) = regrade(&fx, submission_id, json!({ "points": -3 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::PointsNegative as i32);

    let stored = fx
        .storage
        .get_lab_submission_by_id(submission_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.points, 15);

    let (status, body) = regrade(
        &fx,
        submission_id,
        json!({ "points": 10, "comment": "Good" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["points"], 10);
    assert_eq!(body["data"]["status"], "graded");
    assert!(!body["data"]["gradedAt"].is_null());
}

#[actix_web::test]
async fn pending_status_leaves_graded_at_unset() {
    let fx = fixture().await;
    let template_id = template(&fx, Some(20)).await;

    let (_, body) = submit(&fx, template_id, 12, &fx.teacher_token).await;
    let submission_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = regrade(
        &fx,
        submission_id,
        json!({ "points": 14, "status": "pending" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["points"], 14);
    assert_eq!(body["data"]["status"], "pending");
    assert!(body["data"]["gradedAt"].is_null());

    let (_, body) = regrade(
        &fx,
        submission_id,
        json!({ "points": 14, "status": "rejected" }),
    )
    .await;
    assert_eq!(body["data"]["status"], "rejected");
    assert!(!body["data"]["gradedAt"].is_null());
}

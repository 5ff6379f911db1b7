use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{LabSubmissionService, points_error_response, template_not_found};
use crate::grading::validate_submission;
use crate::models::lab_submissions::{
    entities::SubmissionStatus, requests::GradeLabSubmissionRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{self, Action, Resource};

/// 重新评分
///
/// 校验使用模板的当前满分，而不是提交创建时的满分。
pub async fn grade_submission(
    service: &LabSubmissionService,
    submission_id: i64,
    grade: GradeLabSubmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let grader = match access::require(request, Action::Manage, Resource::LabSubmissions) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    let mut submission = match storage.get_lab_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LabSubmissionNotFound,
                "Lab submission not found",
            )));
        }
        Err(e) => return Ok(crate::services::internal_error("Failed to load lab submission", e)),
    };

    let template = match storage.get_lab_template_by_id(submission.lab_template_id).await {
        Ok(Some(template)) => template,
        Ok(None) => return Ok(template_not_found(submission.lab_template_id)),
        Err(e) => return Ok(crate::services::internal_error("Failed to load lab template", e)),
    };

    if let Err(err) = validate_submission(grade.points, template.max_points) {
        return Ok(points_error_response(err));
    }

    submission.points = grade.points;
    submission.comment = grade.comment;
    submission.status = grade.status.unwrap_or(SubmissionStatus::Graded);
    if submission.status.is_reviewed() {
        submission.graded_at = Some(chrono::Utc::now());
    }

    match storage.save_lab_submission(submission).await {
        Ok(Some(submission)) => {
            tracing::info!(
                "Submission {} graded by {}: {} / {:?}",
                submission.id,
                grader.id,
                submission.points,
                template.max_points
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "Lab submission graded")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LabSubmissionNotFound,
            "Lab submission not found",
        ))),
        Err(e) => Ok(crate::services::internal_error("Failed to grade lab submission", e)),
    }
}

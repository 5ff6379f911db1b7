use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{LabSubmissionService, points_error_response, template_not_found};
use crate::grading::validate_submission;
use crate::models::{ApiResponse, lab_submissions::requests::CreateLabSubmissionRequest};
use crate::services::access::{self, Action, Resource};

/// 创建提交，分数按模板当前满分校验
pub async fn create_submission(
    service: &LabSubmissionService,
    submission: CreateLabSubmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = access::require(request, Action::Manage, Resource::LabSubmissions) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    let template = match storage.get_lab_template_by_id(submission.lab_template_id).await {
        Ok(Some(template)) => template,
        Ok(None) => return Ok(template_not_found(submission.lab_template_id)),
        Err(e) => return Ok(crate::services::internal_error("Failed to load lab template", e)),
    };

    if let Err(err) = validate_submission(submission.points, template.max_points) {
        return Ok(points_error_response(err));
    }

    if let Err(response) = crate::services::ensure_student_and_subject(
        storage.as_ref(),
        submission.student_id,
        template.subject_id,
    )
    .await
    {
        return Ok(response);
    }

    match storage.create_lab_submission(submission).await {
        Ok(submission) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(submission, "Lab submission created"))),
        Err(e) => Ok(crate::services::internal_error("Failed to create lab submission", e)),
    }
}

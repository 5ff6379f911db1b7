use std::collections::{HashMap, HashSet};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::LabSubmissionService;
use crate::errors::Result;
use crate::grading::repair_out_of_range_submissions;
use crate::models::{ApiResponse, lab_submissions::responses::RepairReport};
use crate::services::access::{self, Action, Resource};
use crate::storage::Storage;

/// 扫描全部提交，把超过模板满分的分数压回满分并写回
///
/// 启动时与管理员接口共用。只写回被修改的记录，整批在一个事务中完成。
pub async fn repair_submissions(storage: &dyn Storage) -> Result<RepairReport> {
    let templates: HashMap<_, _> = storage
        .list_lab_templates()
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect();
    let mut submissions = storage.list_lab_submissions().await?;
    let scanned = submissions.len() as i64;

    let repaired = repair_out_of_range_submissions(&mut submissions, &templates);
    for fix in &repaired {
        warn!(
            "Submission {} exceeded its lab maximum: {} -> {}",
            fix.id, fix.old_points, fix.new_points
        );
    }

    if !repaired.is_empty() {
        let ids: HashSet<i64> = repaired.iter().map(|r| r.id).collect();
        submissions.retain(|s| ids.contains(&s.id));
        storage.save_lab_submission_points(&submissions).await?;
    }

    info!(
        "Submission repair scanned {}, corrected {}",
        scanned,
        repaired.len()
    );
    Ok(RepairReport { scanned, repaired })
}

pub async fn handle_repair(
    service: &LabSubmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let admin = match access::require(request, Action::Repair, Resource::LabSubmissions) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    info!("Submission repair requested by admin {}", admin.id);

    match repair_submissions(service.get_storage(request).as_ref()).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            report,
            "Submission repair completed",
        ))),
        Err(e) => Ok(crate::services::internal_error("Submission repair failed", e)),
    }
}

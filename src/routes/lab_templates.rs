use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lab_templates::requests::{CreateLabTemplateRequest, LabTemplatePatch};
use crate::services::LabTemplateService;
use crate::utils::SafeIDI64;

static LAB_TEMPLATE_SERVICE: Lazy<LabTemplateService> = Lazy::new(LabTemplateService::new_lazy);

pub async fn list_templates(req: HttpRequest) -> ActixResult<HttpResponse> {
    LAB_TEMPLATE_SERVICE.list_templates(&req).await
}

pub async fn list_by_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LAB_TEMPLATE_SERVICE
        .list_templates_by_subject(subject_id.0, &req)
        .await
}

pub async fn create_template(
    req: HttpRequest,
    template: web::Json<CreateLabTemplateRequest>,
) -> ActixResult<HttpResponse> {
    LAB_TEMPLATE_SERVICE
        .create_template(template.into_inner(), &req)
        .await
}

pub async fn update_template(
    req: HttpRequest,
    template_id: SafeIDI64,
    patch: web::Json<LabTemplatePatch>,
) -> ActixResult<HttpResponse> {
    LAB_TEMPLATE_SERVICE
        .update_template(template_id.0, patch.into_inner(), &req)
        .await
}

pub async fn delete_template(req: HttpRequest, template_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LAB_TEMPLATE_SERVICE
        .delete_template(template_id.0, &req)
        .await
}

pub fn configure_lab_template_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lab-templates")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_templates))
            .route("", web::post().to(create_template))
            .route("/subject/{id}", web::get().to(list_by_subject))
            .route("/{id}", web::put().to(update_template))
            .route("/{id}", web::delete().to(delete_template)),
    );
}

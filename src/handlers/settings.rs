use crate::models::*;
use crate::services::SettingsService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    responses(
        (status = 200, description = "获取设置成功；未配置时 data 为 null", body = Settings)
    )
)]
pub async fn get_settings(service: web::Data<SettingsService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": service.load() })))
}

#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    request_body = Settings,
    responses(
        (status = 200, description = "保存设置成功", body = Settings)
    )
)]
pub async fn save_settings(
    service: web::Data<SettingsService>,
    body: web::Json<Settings>,
) -> Result<HttpResponse> {
    let settings = body.into_inner();
    match service.save(&settings) {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": settings }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/settings/algorithm",
    tag = "settings",
    responses(
        (status = 200, description = "当前抽奖算法说明", body = AlgorithmInfo)
    )
)]
pub async fn get_algorithm(service: web::Data<SettingsService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": service.algorithm_info() })))
}

pub fn settings_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/settings")
            .route("", web::get().to(get_settings))
            .route("", web::put().to(save_settings))
            .route("/algorithm", web::get().to(get_algorithm)),
    );
}

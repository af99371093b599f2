use crate::models::*;
use crate::services::SystemService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/system/ready",
    tag = "system",
    responses(
        (status = 200, description = "系统配置检查", body = ReadinessReport)
    )
)]
pub async fn check_ready(service: web::Data<SystemService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": service.check_ready() })))
}

#[utoipa::path(
    get,
    path = "/system/export",
    tag = "system",
    responses(
        (status = 200, description = "导出全部数据", body = SystemSnapshot)
    )
)]
pub async fn export_data(service: web::Data<SystemService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": service.export() })))
}

#[utoipa::path(
    post,
    path = "/system/import",
    tag = "system",
    request_body = ImportRequest,
    responses(
        (status = 200, description = "导入成功"),
        (status = 400, description = "数据不合法")
    )
)]
/// 导入备份，请求中缺省的部分保持不变
pub async fn import_data(
    service: web::Data<SystemService>,
    body: web::Json<ImportRequest>,
) -> Result<HttpResponse> {
    match service.import(&body.into_inner()) {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "导入完成"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/system/snapshot",
    tag = "system",
    responses(
        (status = 200, description = "写入组合缓存", body = SystemSnapshot)
    )
)]
pub async fn save_snapshot(service: web::Data<SystemService>) -> Result<HttpResponse> {
    match service.save_system_data() {
        Ok(snapshot) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": snapshot }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/system/snapshot",
    tag = "system",
    responses(
        (status = 200, description = "读取组合缓存；不存在时 data 为 null", body = SystemSnapshot)
    )
)]
pub async fn get_snapshot(service: web::Data<SystemService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": service.load_system_data() })))
}

#[utoipa::path(
    delete,
    path = "/system/data",
    tag = "system",
    responses(
        (status = 200, description = "清除全部数据")
    )
)]
pub async fn clear_data(service: web::Data<SystemService>) -> Result<HttpResponse> {
    match service.clear_all() {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "数据已清除"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn system_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/system")
            .route("/ready", web::get().to(check_ready))
            .route("/export", web::get().to(export_data))
            .route("/import", web::post().to(import_data))
            .route("/snapshot", web::get().to(get_snapshot))
            .route("/snapshot", web::post().to(save_snapshot))
            .route("/data", web::delete().to(clear_data)),
    );
}

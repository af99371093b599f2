use crate::services::RecordService;
use actix_web::{HttpResponse, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/records",
    tag = "record",
    responses(
        (status = 200, description = "获取中奖记录成功（最新在前）", body = [WinnerRecord])
    )
)]
pub async fn list_records(service: web::Data<RecordService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": service.load() })))
}

pub fn record_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/records").route("", web::get().to(list_records)));
}

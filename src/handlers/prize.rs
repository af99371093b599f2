use crate::models::*;
use crate::services::{PrizeService, RecordService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/prizes",
    tag = "prize",
    responses(
        (status = 200, description = "获取奖项配置成功", body = [Prize])
    )
)]
/// 获取奖项配置（首次读取时自动迁移旧版配置）
pub async fn list_prizes(service: web::Data<PrizeService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": service.load() })))
}

#[utoipa::path(
    put,
    path = "/prizes",
    tag = "prize",
    request_body = [Prize],
    responses(
        (status = 200, description = "保存奖项配置成功"),
        (status = 400, description = "奖项人数小于 1 或 ID 重复")
    )
)]
pub async fn save_prizes(
    service: web::Data<PrizeService>,
    body: web::Json<Vec<Prize>>,
) -> Result<HttpResponse> {
    let prizes = body.into_inner();
    match service.save(&prizes) {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "count": prizes.len() }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/prizes/{id}/progress",
    tag = "prize",
    params(
        ("id" = String, Path, description = "奖项 ID")
    ),
    responses(
        (status = 200, description = "奖项抽取进度", body = PrizeProgress),
        (status = 404, description = "奖项不存在")
    )
)]
pub async fn prize_progress(
    service: web::Data<PrizeService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match service.find_by_key(&path.into_inner()) {
        Ok(prize) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": service.progress(prize)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/prizes/undo",
    tag = "prize",
    request_body = UndoPrizeRequest,
    responses(
        (status = 200, description = "撤销成功", body = UndoSummary)
    )
)]
/// 撤销某奖项的全部中奖结果：删除记录并把中奖人员恢复为未中奖
pub async fn undo_prize(
    records: web::Data<RecordService>,
    body: web::Json<UndoPrizeRequest>,
) -> Result<HttpResponse> {
    match records.delete_by_prize_name(&body.prize_name) {
        Ok(summary) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": summary }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn prize_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/prizes")
            .route("", web::get().to(list_prizes))
            .route("", web::put().to(save_prizes))
            .route("/undo", web::post().to(undo_prize))
            .route("/{id}/progress", web::get().to(prize_progress)),
    );
}

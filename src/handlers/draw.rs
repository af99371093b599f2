use crate::draw::validate;
use crate::models::*;
use crate::services::LotteryService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/draw",
    tag = "draw",
    request_body = DrawRequest,
    responses(
        (status = 200, description = "抽奖成功；partial 为 true 表示可抽人员不足", body = DrawResult),
        (status = 400, description = "人数不合法或奖项已抽完"),
        (status = 404, description = "奖项不存在"),
        (status = 409, description = "结果未通过公平性校验，已丢弃"),
        (status = 503, description = "安全随机源不可用")
    )
)]
/// 为指定奖项抽取中奖者:
/// 1. 按奖项剩余名额截断人数
/// 2. 按全局设置选择随机 / 加权算法
/// 3. 校验结果并写入中奖记录、更新人员状态
pub async fn run_draw(
    service: web::Data<LotteryService>,
    body: web::Json<DrawRequest>,
) -> Result<HttpResponse> {
    let req = body.into_inner();
    match service.run_draw(&req.prize_id, req.count) {
        Ok(result) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": result }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/draw/validate",
    tag = "draw",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "校验结果", body = ValidationReport)
    )
)]
/// 对任意名单与中奖结果做公平性审计，不修改任何数据
pub async fn validate_result(body: web::Json<ValidateRequest>) -> Result<HttpResponse> {
    let req = body.into_inner();
    let report = validate(&req.participants, &req.winners, req.settings.as_ref());
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": report })))
}

pub fn draw_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/draw")
            .route("", web::post().to(run_draw))
            .route("/validate", web::post().to(validate_result)),
    );
}

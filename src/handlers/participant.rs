use crate::models::*;
use crate::services::{ParticipantService, SettingsService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/participants",
    tag = "participant",
    responses(
        (status = 200, description = "获取人员名单成功", body = [Participant])
    )
)]
/// 获取全部人员（含中奖状态）
pub async fn list_participants(service: web::Data<ParticipantService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": service.load() })))
}

#[utoipa::path(
    put,
    path = "/participants",
    tag = "participant",
    request_body = [Participant],
    responses(
        (status = 200, description = "保存人员名单成功"),
        (status = 400, description = "人员 ID 重复")
    )
)]
/// 覆盖保存人员名单
pub async fn save_participants(
    service: web::Data<ParticipantService>,
    body: web::Json<Vec<Participant>>,
) -> Result<HttpResponse> {
    let participants = body.into_inner();
    match service.save(&participants) {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "count": participants.len() }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/participants/eligible",
    tag = "participant",
    responses(
        (status = 200, description = "获取可抽奖人员成功", body = [Participant])
    )
)]
/// 可参与抽奖的人员（根据是否允许重复中奖过滤）
pub async fn list_eligible(
    service: web::Data<ParticipantService>,
    settings: web::Data<SettingsService>,
) -> Result<HttpResponse> {
    let eligible = service.eligible(settings.load().as_ref());
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": eligible })))
}

#[utoipa::path(
    put,
    path = "/participants/status",
    tag = "participant",
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "更新状态成功", body = Participant),
        (status = 404, description = "人员不存在")
    )
)]
/// 手动更新单个人员中奖状态
pub async fn update_status(
    service: web::Data<ParticipantService>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse> {
    let req = body.into_inner();
    match service.update_status(&req.id, req.status) {
        Ok(p) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": p }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/participants/reset",
    tag = "participant",
    responses(
        (status = 200, description = "重置成功")
    )
)]
/// 所有人员恢复为未中奖（不删除中奖记录）
pub async fn reset_participants(service: web::Data<ParticipantService>) -> Result<HttpResponse> {
    match service.reset_all() {
        Ok(count) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "resetCount": count }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/participants/stats",
    tag = "participant",
    responses(
        (status = 200, description = "部门 / 职级统计", body = ParticipantStats)
    )
)]
pub async fn participant_stats(service: web::Data<ParticipantService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": service.stats() })))
}

pub fn participant_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/participants")
            .route("", web::get().to(list_participants))
            .route("", web::put().to(save_participants))
            .route("/eligible", web::get().to(list_eligible))
            .route("/status", web::put().to(update_status))
            .route("/reset", web::post().to(reset_participants))
            .route("/stats", web::get().to(participant_stats)),
    );
}

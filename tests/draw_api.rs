use actix_web::{App, test, web};
use serde_json::{Value, json};
use std::sync::Arc;

use lottery_backend::handlers;
use lottery_backend::services::*;
use lottery_backend::storage::{MemoryStore, SharedStore};

macro_rules! app {
    ($store:expr) => {{
        let store: SharedStore = $store;
        let participants = ParticipantService::new(store.clone());
        let settings = SettingsService::new(store.clone());
        let records = RecordService::new(store.clone(), participants.clone());
        let prizes = PrizeService::new(store.clone(), records.clone());
        let lottery = LotteryService::new(
            participants.clone(),
            prizes.clone(),
            records.clone(),
            settings.clone(),
            20,
        );
        let system = SystemService::new(
            store,
            participants.clone(),
            prizes.clone(),
            records.clone(),
            settings.clone(),
        );
        test::init_service(
            App::new()
                .app_data(web::Data::new(participants))
                .app_data(web::Data::new(prizes))
                .app_data(web::Data::new(records))
                .app_data(web::Data::new(settings))
                .app_data(web::Data::new(lottery))
                .app_data(web::Data::new(system))
                .service(
                    web::scope("/api/v1")
                        .configure(handlers::participant_config)
                        .configure(handlers::prize_config)
                        .configure(handlers::settings_config)
                        .configure(handlers::record_config)
                        .configure(handlers::draw_config)
                        .configure(handlers::system_config),
                ),
        )
        .await
    }};
}

fn roster() -> Value {
    json!([
        {"id": 1, "name": "Alice", "department": "R&D", "position": "Senior Engineer"},
        {"id": 2, "name": "Bob", "department": "R&D", "position": "Intern"},
        {"id": 3, "name": "Carol", "department": "HR", "position": "Manager"},
        {"id": 4, "name": "Dave", "department": "Ops", "jobTitle": "Director"}
    ])
}

#[actix_web::test]
async fn test_draw_and_undo_round() {
    let app = app!(Arc::new(MemoryStore::new()));

    let req = test::TestRequest::put()
        .uri("/api/v1/participants")
        .set_json(roster())
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::put()
        .uri("/api/v1/prizes")
        .set_json(json!([
            {"id": 1, "name": "Grand Prize", "level": 1, "count": 2},
            {"id": 2, "name": "Lucky Prize", "level": 2, "count": 1}
        ]))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::put()
        .uri("/api/v1/settings")
        .set_json(json!({"drawMode": "weighted", "weightedBy": "department"}))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/v1/draw")
        .set_json(json!({"prizeId": 1, "count": 2}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["winners"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["partial"], false);
    assert_eq!(body["data"]["validation"]["isValid"], true);

    let req = test::TestRequest::post()
        .uri("/api/v1/draw")
        .set_json(json!({"prizeId": 2, "count": 1}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["winners"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/participants/eligible")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/prizes/1/progress")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["completed"], true);

    // 已抽完的奖项不能再抽
    let req = test::TestRequest::post()
        .uri("/api/v1/draw")
        .set_json(json!({"prizeId": 1, "count": 1}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/v1/prizes/undo")
        .set_json(json!({"prizeName": "Grand Prize"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["deletedCount"], 2);
    assert_eq!(body["data"]["participantsReset"], 2);

    let req = test::TestRequest::get().uri("/api/v1/records").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["prizeName"], "Lucky Prize");

    let req = test::TestRequest::get()
        .uri("/api/v1/participants/eligible")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::post()
        .uri("/api/v1/participants/reset")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["resetCount"], 1);
}

#[actix_web::test]
async fn test_validate_endpoint_flags_outsider() {
    let app = app!(Arc::new(MemoryStore::new()));
    let req = test::TestRequest::post()
        .uri("/api/v1/draw/validate")
        .set_json(json!({
            "participants": roster(),
            "winners": [{"id": 9, "name": "Mallory"}]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["isValid"], false);
    assert!(body["data"]["reason"].as_str().unwrap().contains("Mallory"));
}

#[actix_web::test]
async fn test_legacy_prizes_served_and_migrated() {
    let store = Arc::new(MemoryStore::with_entries([(
        "lottery_config",
        r#"{"prizes":[{"id":1,"name":"P1","count":1}]}"#,
    )]));
    let app = app!(store.clone());

    let req = test::TestRequest::get().uri("/api/v1/prizes").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["name"], "P1");

    use lottery_backend::storage::KeyValueStore;
    assert!(store.get("lottery_prizes").unwrap().is_some());
}

#[actix_web::test]
async fn test_readiness_and_unknown_prize() {
    let app = app!(Arc::new(MemoryStore::new()));

    let req = test::TestRequest::get().uri("/api/v1/system/ready").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["isReady"], false);

    let req = test::TestRequest::post()
        .uri("/api/v1/draw")
        .set_json(json!({"prizeId": 42, "count": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use lottery_backend::{
    config::Config,
    handlers,
    middlewares::create_cors,
    services::*,
    storage::create_store,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建存储
    let store = create_store(&config.storage).expect("Failed to open storage");

    // 创建服务
    let participant_service = ParticipantService::new(store.clone());
    let settings_service = SettingsService::new(store.clone());
    let record_service = RecordService::new(store.clone(), participant_service.clone());
    let prize_service = PrizeService::new(store.clone(), record_service.clone());
    let lottery_service = LotteryService::new(
        participant_service.clone(),
        prize_service.clone(),
        record_service.clone(),
        settings_service.clone(),
        config.draw.max_batch,
    );
    let system_service = SystemService::new(
        store,
        participant_service.clone(),
        prize_service.clone(),
        record_service.clone(),
        settings_service.clone(),
    );

    let readiness = system_service.check_ready();
    if !readiness.is_ready {
        log::warn!(
            "Lottery not fully configured, missing: {}",
            readiness.missing_items.join(", ")
        );
    }

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(participant_service.clone()))
            .app_data(web::Data::new(prize_service.clone()))
            .app_data(web::Data::new(record_service.clone()))
            .app_data(web::Data::new(settings_service.clone()))
            .app_data(web::Data::new(lottery_service.clone()))
            .app_data(web::Data::new(system_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::participant_config)
                    .configure(handlers::prize_config)
                    .configure(handlers::settings_config)
                    .configure(handlers::record_config)
                    .configure(handlers::draw_config)
                    .configure(handlers::system_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}

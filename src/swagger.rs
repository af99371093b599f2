use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::participant::list_participants,
        handlers::participant::save_participants,
        handlers::participant::list_eligible,
        handlers::participant::update_status,
        handlers::participant::reset_participants,
        handlers::participant::participant_stats,
        handlers::prize::list_prizes,
        handlers::prize::save_prizes,
        handlers::prize::prize_progress,
        handlers::prize::undo_prize,
        handlers::settings::get_settings,
        handlers::settings::save_settings,
        handlers::settings::get_algorithm,
        handlers::record::list_records,
        handlers::draw::run_draw,
        handlers::draw::validate_result,
        handlers::system::check_ready,
        handlers::system::export_data,
        handlers::system::import_data,
        handlers::system::get_snapshot,
        handlers::system::save_snapshot,
        handlers::system::clear_data,
    ),
    components(
        schemas(
            Participant,
            ParticipantStatus,
            UpdateStatusRequest,
            ParticipantStats,
            Prize,
            PrizeProgress,
            UndoPrizeRequest,
            UndoSummary,
            WinnerRecord,
            Settings,
            DrawMode,
            WeightedBy,
            AlgorithmInfo,
            DrawRequest,
            DrawResult,
            ValidateRequest,
            ValidationReport,
            ReadinessReport,
            SystemSnapshot,
            ImportRequest,
            ApiError,
        )
    ),
    tags(
        (name = "participant", description = "Participant roster API"),
        (name = "prize", description = "Prize configuration API"),
        (name = "settings", description = "Draw settings API"),
        (name = "record", description = "Winner record API"),
        (name = "draw", description = "Draw and validation API"),
        (name = "system", description = "Backup, restore and readiness API"),
    ),
    info(
        title = "Lottery Backend API",
        version = "1.0.0",
        description = "Annual meeting prize draw REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

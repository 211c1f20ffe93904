use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::config::CorsConfig;

pub(crate) mod info;
pub(crate) mod quiz;
pub(crate) mod upload;


/// Registers every route of the API. `json_limit` caps JSON request bodies.
pub fn configure(cfg: &mut web::ServiceConfig, json_limit: usize) {
    cfg.app_data(web::JsonConfig::default().limit(json_limit).error_handler(json_error))
        .route("/", web::get().to(info::index))
        .route("/levels", web::get().to(info::levels))
        .route("/upload-questions", web::post().to(upload::upload_questions))
        .route("/start-assessment", web::post().to(quiz::start_assessment))
        .route("/submit-assessment", web::post().to(quiz::submit_assessment));
}

/// Browser clients are served from another origin; an empty origin list allows all.
pub fn cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);
    if config.allowed_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

// Rejected JSON bodies get the same `{"detail": ...}` shape as other errors
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("rejected request body: {err}");
    let response = HttpResponse::BadRequest().json(json!({ "detail": err.to_string() }));
    InternalError::from_response(err, response).into()
}

// Route exports
pub mod contact;
pub mod site;

use actix_web::web;
use crate::config::Settings;
use crate::services::MailClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub mail: Arc<MailClient>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(site::health_check))
        .service(
            web::scope("/api")
                .configure(contact::configure)
                .configure(site::configure),
        );
}

/// Malformed or non-JSON bodies get the same JSON error shape as everything else
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

fn handle_json_payload_error(
    err: actix_web::error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = actix_web::HttpResponse::BadRequest()
        .json(crate::models::ErrorResponse::new("Invalid request body"));
    actix_web::error::InternalError::from_response(err, response).into()
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(handle_query_payload_error)
}

fn handle_query_payload_error(
    err: actix_web::error::QueryPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    let response = actix_web::HttpResponse::BadRequest()
        .json(crate::models::ErrorResponse::new("Invalid query string"));
    actix_web::error::InternalError::from_response(err, response).into()
}

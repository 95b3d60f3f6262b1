use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use studio_return::config::Settings;
use studio_return::routes::{self, AppState};
use studio_return::services::MailClient;
use studio_return::telemetry;
use tracing::{error, info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "full".to_string());
    telemetry::init(&log_level, &log_format);

    info!("Starting Studio Return site service...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    if !settings.mail.is_configured() {
        warn!("RESEND_API_KEY is not set; contact submissions will fail until it is");
    }

    let mail = MailClient::new(&settings.mail).map_err(|e| {
        error!("Failed to build mail client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!("Mail client initialized (delivering to {})", settings.mail.to);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    let app_state = AppState {
        settings: Arc::new(settings),
        mail: Arc::new(mail),
    };

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

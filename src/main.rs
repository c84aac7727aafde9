use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use tracing::info;

use resumelink::config::AppConfig;
use resumelink::mailer::Mailer;
use resumelink::services::{
    AppStartTime, ContactService, HealthService, ResumeService, ShareService,
};
use resumelink::storages::StorageFactory;
use resumelink::system::logging::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Guard must outlive the server so buffered log writes get flushed
    let _log_guard = init_logging(&config);

    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let storage = StorageFactory::create(&config);
    info!(
        "Using storage backend: {}",
        storage.get_backend_name().await
    );

    let mailer = Mailer::from_config(&config.smtp).expect("Invalid mail configuration");
    match &mailer {
        Some(_) => info!("Mail relay configured for {}", config.smtp.contact_email),
        None => info!("Mail relay not configured, contact messages will only be logged"),
    }
    let mailer = web::Data::new(mailer);

    // Roughly 100 requests / 15 min across the API, 5 contact
    // submissions / hour
    let api_limiter = GovernorConfigBuilder::default()
        .seconds_per_request(9)
        .burst_size(100)
        .finish()
        .expect("Invalid API rate limit");
    let contact_limiter = GovernorConfigBuilder::default()
        .seconds_per_request(720)
        .burst_size(5)
        .finish()
        .expect("Invalid contact rate limit");

    let bind_address = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server at http://{}", bind_address);

    let app_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .app_data(mailer.clone())
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::JsonConfig::default().limit(10 * 1024))
            .wrap(build_cors(&app_config))
            .service(
                web::scope("/api")
                    .wrap(Governor::new(&api_limiter))
                    .route("/health", web::get().to(HealthService::health_check))
                    .service(
                        web::resource("/contact")
                            .wrap(Governor::new(&contact_limiter))
                            .route(web::post().to(ContactService::send_message)),
                    )
                    .route(
                        "/resume/share-link",
                        web::get().to(ShareService::generate_share_link),
                    )
                    .route(
                        "/resume/share/{id}",
                        web::get().to(ShareService::resolve_shared),
                    )
                    .route("/resume/download", web::get().to(ResumeService::download)),
            )
            .default_service(web::route().to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}

fn build_cors(config: &AppConfig) -> Cors {
    Cors::default()
        .allowed_origin(&config.cors_origin)
        .allowed_methods(vec!["GET", "POST"])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .max_age(3600)
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
}

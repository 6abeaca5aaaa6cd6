use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use authkit_api::middleware;
use authkit_api::routes;
use authkit_core::services::auth::{AuthService, AuthServiceConfig};
use authkit_core::services::token::{CleanupScheduler, TokenConfig, TokenIssuer};
use authkit_infra::database::{create_pool, MySqlTokenRepository, MySqlUserRepository};
use authkit_infra::mail::HttpMailer;
use authkit_shared::config::{AuthConfig, DatabaseConfig, MailConfig, ServerConfig};
use authkit_shared::types::response::ErrorResponse;

use routes::auth::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting AuthKit API server");

    // Load configuration
    let auth_config = AuthConfig::from_env();
    if auth_config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development default. Do not run this in production.");
    }
    let database_config = DatabaseConfig::from_env();
    let mail_config = MailConfig::from_env();
    let server_config = ServerConfig::from_env();

    // Database pool and repositories
    let pool = create_pool(&database_config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let token_repository = Arc::new(MySqlTokenRepository::new(pool));

    // Token issuer and mail client
    let issuer = Arc::new(TokenIssuer::new(TokenConfig::from(&auth_config.jwt)));
    let mailer = Arc::new(
        HttpMailer::new(mail_config.clone()).map_err(|e| std::io::Error::other(e.to_string()))?,
    );

    // Auth service wiring
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&token_repository),
        issuer,
        mailer,
        AuthServiceConfig::from(&mail_config),
    ));

    // Daily sweep of expired refresh-token records
    let scheduler = CleanupScheduler::new(Arc::clone(&token_repository));
    let sweep_handle = scheduler.start();

    let state = web::Data::new(AppState {
        auth_service,
        cookie: auth_config.cookie.clone(),
    });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .configure(
                routes::auth::configure::<MySqlUserRepository, MySqlTokenRepository, HttpMailer>,
            )
            .route("/health", web::get().to(health_check))
            .default_service(web::route().to(not_found))
    });
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    let result = server.bind(&bind_address)?.run().await;

    sweep_handle.abort();
    result
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "authkit-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}

use std::sync::Arc;

use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use log::info;

use ag_api::app::create_app;
use ag_api::config::Config;
use ag_api::routes::auth::AppState;
use ag_core::services::auth::AuthService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.default_log_filter()),
    );

    info!("Starting Authgate API Server ({})", config.environment());

    let token_service = Arc::new(
        config
            .token_service()
            .context("Failed to initialize token service")?,
    );
    let authenticator = config
        .authenticator()
        .context("Failed to load principal directory")?;

    let auth_service = Arc::new(AuthService::new(authenticator, token_service));
    let app_state = web::Data::new(AppState::new(auth_service));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone()).wrap(Logger::default())
    });
    if let Some(workers) = config.workers() {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}

mod config;
mod db;
mod handlers;
mod middleware;
mod models;
mod services;
mod types;
mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "core_console=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;

    let state = db::init(&config.mongodb_uri, &config.mongodb_name).await?;

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/profile",
            get(handlers::profile::list_profiles).post(handlers::profile::create_profile),
        )
        .route(
            "/api/profile/dto",
            post(handlers::profile::create_profile_from_dto),
        )
        .route(
            "/api/profile/:profileName",
            get(handlers::profile::get_profile)
                .put(handlers::profile::update_profile)
                .delete(handlers::profile::delete_profile),
        )
        .route(
            "/api/profile/:profileName/dto",
            get(handlers::profile::get_profile_dto),
        )
        .route(
            "/api/subscriber",
            get(handlers::subscriber::list_subscribers)
                .post(handlers::subscriber::create_subscriber),
        )
        .route(
            "/api/subscriber/dto",
            post(handlers::subscriber::create_subscriber_from_dto),
        )
        .route(
            "/api/subscriber/:ueId",
            get(handlers::subscriber::get_subscriber)
                .put(handlers::subscriber::update_subscriber)
                .delete(handlers::subscriber::delete_subscriber),
        )
        .route(
            "/api/subscriber/:ueId/dto",
            get(handlers::subscriber::get_subscriber_dto),
        )
        .route("/api/verify-supi", post(handlers::subscriber::verify_supi))
        .route(
            "/api/template/profile",
            get(handlers::template::profile_template),
        )
        .route(
            "/api/template/subscriber",
            get(handlers::template::subscriber_template),
        )
        .route("/api/template/slice", get(handlers::template::slice_template))
        .route(
            "/api/template/flow-rule",
            get(handlers::template::flow_rule_template),
        )
        .route(
            "/api/template/up-security",
            get(handlers::template::up_security_template),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.auth.enabled {
        app = app.layer(axum::middleware::from_fn_with_state(
            config.auth.clone(),
            middleware::bearer_validation_middleware,
        ));
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting console server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

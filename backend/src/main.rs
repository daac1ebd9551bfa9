use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, AllowOrigin};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use std::sync::Arc;

mod handlers {
    pub mod contact_handlers;
}
mod utils {
    pub mod discord;
}

use handlers::contact_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    http_client: reqwest::Client,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if std::env::var("DISCORD_WEBHOOK_URL").map(|v| v.is_empty()).unwrap_or(true) {
        tracing::warn!("DISCORD_WEBHOOK_URL is not set, contact submissions will fail");
    }

    let state = Arc::new(AppState {
        http_client: reqwest::Client::new(),
    });

    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::send_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
                .allow_origin(AllowOrigin::exact(
                    std::env::var("FRONTEND_URL")
                        .unwrap_or_else(|_| "http://localhost:8080".to_string())
                        .parse()
                        .expect("Invalid FRONTEND_URL"),
                ))
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ]),
        )
        .with_state(state);

    use tokio::net::TcpListener;
    let port = match std::env::var("ENVIRONMENT").as_deref() {
        Ok("staging") => 3100,
        _ => 3000,
    };
    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await.unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}

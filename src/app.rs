use std::net::SocketAddr;

use axum::{
    routing::{get, get_service},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::AppState;
use crate::{auth, chat, error};

/// POST-only API paths that are also client-side routes of the frontend.
const API_PATHS: [&str; 3] = ["/signup", "/login", "/chat"];

pub fn build_app(state: AppState) -> Router {
    let environment = state.config.environment;
    let static_dir = state.config.static_dir.clone();
    // Unknown GET paths get the SPA entry so client-side routes survive a reload.
    let entry = ServeFile::new(static_dir.join("index.html"));
    let frontend = ServeDir::new(&static_dir).fallback(entry.clone());

    let mut router = Router::new()
        .merge(auth::router())
        .merge(chat::router())
        .route("/test", get(liveness));
    for path in API_PATHS {
        router = router.route(path, get_service(entry.clone()));
    }

    let router = router
        .fallback(get_service(frontend).fallback(not_found))
        .with_state(state);

    error::install(router, environment)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn liveness() -> Json<Value> {
    Json(json!({ "message": "Server is working" }))
}

pub async fn serve(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

mod app;
mod auth;
mod chat;
mod config;
mod db;
mod error;
mod extract;
mod state;
#[cfg(test)]
mod testing;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "chatgate=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    if config.chat.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; /chat will answer 503");
    }
    tracing::info!(environment = ?config.environment, "starting");

    let state = AppState::init(config).await?;
    let config = state.config.clone();
    let app = app::build_app(state);

    app::serve(app, &config).await
}

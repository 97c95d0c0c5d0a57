use crate::state::AppState;
use axum::Router;

pub mod client;
mod dto;
pub mod handlers;
pub mod services;
#[cfg(test)]
pub mod stub;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::chat_routes())
}

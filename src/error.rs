use std::any::Any;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::{auth::repo::StoreError, chat::services::ChatError, config::Environment};

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("User already exists")]
    UserExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Chatbot service is not configured")]
    ChatUnavailable,
    #[error("Not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateKey => AppError::UserExists,
            other => AppError::Internal(anyhow::Error::new(other).context("user store")),
        }
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::NotConfigured => AppError::ChatUnavailable,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Raw error text attached to a 500 response, surfaced only in development.
#[derive(Debug, Clone)]
struct InternalDetail(String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_)
            | AppError::UserExists
            | AppError::UserNotFound
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::ChatUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(e) => {
                let detail = format!("{e:#}");
                error!(error = %detail, "unhandled error");
                let mut res =
                    (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(GENERIC_ERROR_MESSAGE))
                        .into_response();
                res.extensions_mut().insert(InternalDetail(detail));
                return res;
            }
        };
        (status, ErrorBody::new(self.to_string())).into_response()
    }
}

/// Wraps the router in the last-resort error net: panics become 500s, and
/// internal error text is exposed only when running in development.
pub fn install(router: Router, environment: Environment) -> Router {
    router
        .layer(CatchPanicLayer::custom(move |payload: Box<dyn Any + Send + 'static>| {
            panic_response(environment, payload)
        }))
        .layer(middleware::from_fn_with_state(
            environment,
            expose_internal_detail,
        ))
}

async fn expose_internal_detail(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let mut res = next.run(request).await;
    match res.extensions_mut().remove::<InternalDetail>() {
        Some(InternalDetail(detail)) if environment.is_development() => {
            (res.status(), ErrorBody::new(detail)).into_response()
        }
        _ => res,
    }
}

fn panic_response(environment: Environment, payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    };
    error!(panic = %detail, "handler panicked");

    let message = if environment.is_development() {
        detail
    } else {
        GENERIC_ERROR_MESSAGE.to_string()
    };
    (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(message)).into_response()
}

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, PublicUser, SignupRequest, SignupResponse},
        password::{hash_password_blocking, verify_password_blocking},
        repo_types::NewUser,
    },
    error::AppError,
    extract::ValidJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let signup = payload.validate()?;

    // Fast path; a racing insert is still caught by the store's unique index below.
    if state.users.find_by_email(&signup.email).await?.is_some() {
        warn!(email = %signup.email, "email already registered");
        return Err(AppError::UserExists);
    }

    let password_hash = hash_password_blocking(signup.password).await?;

    let user = state
        .users
        .create(NewUser {
            name: signup.name,
            email: signup.email,
            password_hash,
        })
        .await
        .inspect_err(|e| warn!(error = %e, "create user failed"))?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully",
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> Result<Json<PublicUser>, AppError> {
    let login = payload.validate()?;

    let user = match state.users.find_by_email(&login.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %login.email, "login unknown email");
            return Err(AppError::UserNotFound);
        }
    };

    if !verify_password_blocking(login.password, user.password_hash.clone()).await? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(PublicUser {
        name: user.name,
        email: user.email,
    }))
}

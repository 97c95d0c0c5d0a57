use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,                   // internal only
    pub name: String,
    pub email: String,              // unique across all users
    pub password_hash: String,      // bcrypt hash, never returned to clients
    pub created_at: OffsetDateTime, // set once by the store
}

/// Fields supplied by signup; the store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

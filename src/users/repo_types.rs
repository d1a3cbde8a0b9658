use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,              // SERIAL primary key
    pub email: String,        // user email
    #[serde(skip_serializing)]
    pub password: String,     // Argon2 hash, never exposed
}

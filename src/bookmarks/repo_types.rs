use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub id: i32,
    pub user_id: i32,
    pub url: String,
    pub title: String,
    pub created_at: OffsetDateTime,
}

use crate::users::repo_types::User;
use sqlx::PgPool;

impl User {
    /// Create a new user with an already-hashed password.
    pub async fn create(db: &PgPool, email: &str, password_hash: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            RETURNING id, email, password
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Find a user by id. An absent id returns `None` without touching
    /// the database, as does an id with no matching row.
    pub async fn find(db: &PgPool, id: Option<i32>) -> anyhow::Result<Option<User>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by email, for login.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    // The pool in AppState::fake() is lazy and never connects; if find()
    // issued a query for an absent id this would error instead of
    // short-circuiting.
    #[tokio::test]
    async fn find_with_absent_id_skips_the_database() {
        let state = AppState::fake();
        let found = User::find(&state.db, None).await.expect("no query, no error");
        assert!(found.is_none());
    }
}

use crate::bookmarks::repo_types::Bookmark;
use sqlx::PgPool;

impl Bookmark {
    pub async fn list_by_user(db: &PgPool, user_id: i32) -> anyhow::Result<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, url, title, created_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: i32,
        url: &str,
        title: &str,
    ) -> anyhow::Result<Bookmark> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (user_id, url, title)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, url, title, created_at
            "#,
        )
        .bind(user_id)
        .bind(url)
        .bind(title)
        .fetch_one(db)
        .await?;
        Ok(bookmark)
    }
}

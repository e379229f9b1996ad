use crate::entities::SessionSticker;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Postgres, QueryBuilder};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepositoryTrait {
    /// Replaces every sticker stored for `session_id` with `stickers`.
    async fn save_session(&self, session_id: &str, stickers: &[SessionSticker]) -> Result<()>;

    /// Stickers of a session in the order they were saved.
    async fn get_session(&self, session_id: &str) -> Result<Vec<SessionSticker>>;
}

#[derive(Clone)]
pub struct SessionRepository {
    pool: Pool<Postgres>,
}

impl SessionRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepositoryTrait for SessionRepository {
    async fn save_session(&self, session_id: &str, stickers: &[SessionSticker]) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to begin transaction")?;

        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&mut *tx)
            .await
            .context("failed to delete existing stickers")?;

        if !stickers.is_empty() {
            let mut insert = QueryBuilder::<Postgres>::new(
                "INSERT INTO sessions (session_id, sticker_id, url, width, height, x, y) ",
            );
            insert.push_values(stickers, |mut row, sticker| {
                row.push_bind(session_id.to_string())
                    .push_bind(sticker.sticker_id.clone())
                    .push_bind(sticker.url.clone())
                    .push_bind(sticker.width)
                    .push_bind(sticker.height)
                    .push_bind(sticker.x)
                    .push_bind(sticker.y);
            });
            insert
                .build()
                .execute(&mut *tx)
                .await
                .context("failed to insert stickers")?;
        }

        tx.commit().await.context("failed to commit transaction")?;
        Ok(())
    }

    async fn get_session(&self, session_id: &str) -> Result<Vec<SessionSticker>> {
        let stickers = sqlx::query_as::<_, SessionSticker>(
            r#"
            SELECT sticker_id, url, width, height, x, y
            FROM sessions
            WHERE session_id = $1
            ORDER BY id
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .context("failed to query session")?;

        Ok(stickers)
    }
}

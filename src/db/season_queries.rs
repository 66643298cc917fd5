use sqlx::PgPool;

use crate::models::poker::Season;

#[derive(Debug, Clone)]
pub struct SeasonQueries {
    pool: PgPool,
}

impl SeasonQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All seasons, most recently created first. The first element is the
    /// redirect target of the landing page. The id tie-break keeps the
    /// ordering stable when several seasons share a creation timestamp.
    pub async fn all_seasons(&self) -> Result<Vec<Season>, sqlx::Error> {
        sqlx::query_as::<_, Season>(
            "SELECT id, name, created_at FROM seasons ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
    }
}

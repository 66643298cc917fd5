use sqlx::PgPool;

use crate::models::poker::{Player, PlayerStatus};

#[derive(Debug, Clone)]
pub struct PlayerQueries {
    pool: PgPool,
}

impl PlayerQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every member of a season, annotated with hosting status.
    ///
    /// A player may have hosted several games in one season; the grouped
    /// subquery surfaces the earliest game date so each member yields
    /// exactly one row. Rows come back in membership/creation order; the
    /// visited/to-visit split happens in page assembly.
    pub async fn season_player_status(
        &self,
        season_id: i32,
    ) -> Result<Vec<PlayerStatus>, sqlx::Error> {
        sqlx::query_as::<_, PlayerStatus>(
            r#"
            SELECT p.id, p.name, p.created_at, h.hosted_on
            FROM players p
            JOIN season_players sp ON sp.player_id = p.id
            LEFT JOIN (
                SELECT host_id, MIN(game_date) AS hosted_on
                FROM games
                WHERE season_id = $1
                GROUP BY host_id
            ) h ON h.host_id = p.id
            WHERE sp.season_id = $1
            ORDER BY p.created_at ASC, p.id ASC
            "#,
        )
        .bind(season_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Every player in the system, ordered by name, for the add-game form.
    pub async fn all_players(&self) -> Result<Vec<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>(
            "SELECT id, name, created_at FROM players ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
    }
}

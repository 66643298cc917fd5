use sqlx::PgPool;
use tracing::{debug, warn};

use crate::models::poker::{Game, NewGame, SeasonGame};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct GameQueries {
    pool: PgPool,
}

impl GameQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every game of a season with host, winner and second place resolved
    /// to names, oldest first.
    ///
    /// The winner and second-place joins are inner joins: a game whose
    /// outcome has not been recorded yet does not appear here, even though
    /// it exists and is reachable via `find_game`.
    pub async fn season_games(&self, season_id: i32) -> Result<Vec<SeasonGame>, sqlx::Error> {
        sqlx::query_as::<_, SeasonGame>(
            r#"
            SELECT
                g.id, g.season_id, g.host_id, g.winner_id, g.second_place_id,
                g.game_date, g.created_at,
                host.name AS host_name,
                winner.name AS winner_name,
                second.name AS second_place_name
            FROM games g
            JOIN players host ON g.host_id = host.id
            JOIN players winner ON g.winner_id = winner.id
            JOIN players second ON g.second_place_id = second.id
            WHERE g.season_id = $1
            ORDER BY g.game_date ASC, g.id ASC
            "#,
        )
        .bind(season_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Insert a new game and return the stored row. Referential integrity
    /// is left to the database; membership of the host or winner in the
    /// season is not checked.
    pub async fn add_game(&self, new_game: &NewGame) -> Result<Game, sqlx::Error> {
        debug!(
            "Inserting game: season {} host {} on {}",
            new_game.season_id, new_game.host_id, new_game.game_date
        );

        sqlx::query_as::<_, Game>(
            r#"
            INSERT INTO games (season_id, host_id, winner_id, second_place_id, game_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, season_id, host_id, winner_id, second_place_id, game_date, created_at
            "#,
        )
        .bind(new_game.season_id)
        .bind(new_game.host_id)
        .bind(new_game.winner_id)
        .bind(new_game.second_place_id)
        .bind(new_game.game_date)
        .fetch_one(&self.pool)
        .await
    }

    /// Set the date of a game. An id that matches no row affects nothing
    /// and is not an error; the caller sees the affected row count.
    pub async fn update_game_date(
        &self,
        game_id: i32,
        new_date: NaiveDate,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE games SET game_date = $1 WHERE id = $2")
            .bind(new_date)
            .bind(game_id)
            .execute(&self.pool)
            .await?;

        let rows = result.rows_affected();
        if rows == 0 {
            warn!("Game date update matched no row: game {}", game_id);
        }
        Ok(rows)
    }

    /// Fetch a single game by id, including games the season listing
    /// excludes for lack of a recorded winner.
    pub async fn find_game(&self, game_id: i32) -> Result<Option<Game>, sqlx::Error> {
        sqlx::query_as::<_, Game>(
            r#"
            SELECT id, season_id, host_id, winner_id, second_place_id, game_date, created_at
            FROM games
            WHERE id = $1
            "#,
        )
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await
    }
}

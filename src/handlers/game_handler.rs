use actix_web::http::header;
use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::GameQueries;
use crate::models::poker::{AddGameForm, UpdateGameDateForm};

fn season_redirect(season_id: i32) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/season/{}", season_id)))
        .finish()
}

/// Record a new game and bounce back to its season page.
#[tracing::instrument(
    name = "Add game",
    skip(form, pool),
    fields(season_id = %form.season_id, host_id = %form.host_id)
)]
pub async fn add_game(form: web::Form<AddGameForm>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let new_game = match form.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Rejected add-game form: {}", e);
            return Ok(HttpResponse::BadRequest().body(e.to_string()));
        }
    };

    let games = GameQueries::new(pool.get_ref().clone());
    match games.add_game(&new_game).await {
        Ok(game) => {
            tracing::info!("Added game {} to season {}", game.id, game.season_id);
            Ok(season_redirect(game.season_id))
        }
        Err(e) => {
            tracing::error!("Failed to add game: {}", e);
            Ok(HttpResponse::InternalServerError().body("Failed to add game"))
        }
    }
}

/// Move a game to a new date. An unknown game id changes nothing and is
/// still answered with the redirect; the outcome is logged either way.
#[tracing::instrument(
    name = "Update game date",
    skip(form, pool),
    fields(game_id = %form.game_id, season_id = %form.season_id)
)]
pub async fn update_game_date(
    form: web::Form<UpdateGameDateForm>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let update = match form.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Rejected update-date form: {}", e);
            return Ok(HttpResponse::BadRequest().body(e.to_string()));
        }
    };

    let games = GameQueries::new(pool.get_ref().clone());
    match games.update_game_date(update.game_id, update.new_date).await {
        Ok(rows) => {
            tracing::info!(
                "Game {} date set to {} ({} row(s))",
                update.game_id,
                update.new_date,
                rows
            );
            Ok(season_redirect(update.season_id))
        }
        Err(e) => {
            tracing::error!("Failed to update game {} date: {}", update.game_id, e);
            Ok(HttpResponse::InternalServerError().body("Failed to update game date"))
        }
    }
}

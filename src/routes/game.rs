use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::game_handler;
use crate::models::poker::{AddGameForm, UpdateGameDateForm};

pub async fn add_game(
    form: web::Form<AddGameForm>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    game_handler::add_game(form, pool).await
}

pub async fn update_game_date(
    form: web::Form<UpdateGameDateForm>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    game_handler::update_game_date(form, pool).await
}

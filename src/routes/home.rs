use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::home_handler;

#[get("/")]
async fn home(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    home_handler::home(pool).await
}

use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::season_handler;

/// The id stays a raw string here so a non-numeric value is a 400 from
/// the handler, not a routing miss.
#[get("/season/{season_id}")]
async fn season_page(path: web::Path<String>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    season_handler::season_page(path.into_inner(), pool).await
}

use actix_web::http::header;
use actix_web::{web, HttpResponse, Result};
use askama::Template;
use chrono::{Datelike, Utc};
use sqlx::PgPool;

use crate::db::SeasonQueries;
use crate::handlers::render_html;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    current_year: i32,
}

/// Landing page: redirect to the most recently created season, or render
/// the empty landing page when no season exists yet.
#[tracing::instrument(name = "Render landing page", skip(pool))]
pub async fn home(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let seasons = SeasonQueries::new(pool.get_ref().clone());

    match seasons.all_seasons().await {
        Ok(seasons) => {
            if let Some(newest) = seasons.first() {
                tracing::info!("Redirecting to season {}", newest.id);
                return Ok(HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, format!("/season/{}", newest.id)))
                    .finish());
            }

            let page = HomeTemplate {
                current_year: Utc::now().year(),
            };
            Ok(render_html(&page))
        }
        Err(e) => {
            tracing::error!("Failed to load seasons: {}", e);
            Ok(HttpResponse::InternalServerError().body("Failed to load seasons"))
        }
    }
}

use actix_web::{web, HttpResponse, Result};
use askama::Template;
use chrono::{Datelike, Utc};
use sqlx::PgPool;

use crate::dashboard::{DashboardService, SeasonDashboard};
use crate::handlers::render_html;

#[derive(Template)]
#[template(path = "season.html")]
struct SeasonPageTemplate {
    seasons: Vec<SeasonOption>,
    current_season_id: i32,
    current_season_name: String,
    is_latest_season: bool,
    visited: Vec<VisitedRow>,
    to_visit: Vec<ToVisitRow>,
    games: Vec<GameRow>,
    all_players: Vec<PlayerOption>,
    current_date: String,
    current_year: i32,
}

struct SeasonOption {
    id: i32,
    name: String,
    is_current: bool,
}

struct VisitedRow {
    name: String,
    hosted_on: String,
}

struct ToVisitRow {
    name: String,
}

struct GameRow {
    id: i32,
    game_date: String,
    host_name: String,
    winner_name: String,
    second_place_name: String,
}

struct PlayerOption {
    id: i32,
    name: String,
}

/// Season dashboard. A non-numeric id is rejected before any query runs;
/// an id that matches no season renders the page shell with empty lists.
#[tracing::instrument(name = "Render season page", skip(pool))]
pub async fn season_page(season_id: String, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let season_id = match season_id.parse::<i32>() {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!("Rejected non-numeric season id: {}", season_id);
            return Ok(HttpResponse::BadRequest().body("Invalid season ID"));
        }
    };

    let service = DashboardService::new(pool.get_ref().clone());
    match service.season_dashboard(season_id).await {
        Ok(dashboard) => {
            tracing::info!(
                "Season {}: {} visited, {} to visit, {} games",
                season_id,
                dashboard.visited.len(),
                dashboard.to_visit.len(),
                dashboard.games.len()
            );
            let page = into_template(season_id, dashboard);
            Ok(render_html(&page))
        }
        Err(e) => {
            tracing::error!("Failed to assemble season {}: {}", season_id, e);
            Ok(HttpResponse::InternalServerError().body("Failed to load season"))
        }
    }
}

/// Flatten the dashboard into display-ready rows; dates are formatted
/// here so the template stays free of logic.
fn into_template(season_id: i32, dashboard: SeasonDashboard) -> SeasonPageTemplate {
    let now = Utc::now();

    SeasonPageTemplate {
        seasons: dashboard
            .seasons
            .iter()
            .map(|s| SeasonOption {
                id: s.id,
                name: s.name.clone(),
                is_current: s.id == season_id,
            })
            .collect(),
        current_season_id: season_id,
        current_season_name: dashboard
            .current_season
            .map(|s| s.name)
            .unwrap_or_default(),
        is_latest_season: dashboard.is_latest_season,
        visited: dashboard
            .visited
            .iter()
            .map(|p| VisitedRow {
                name: p.name.clone(),
                hosted_on: p
                    .hosted_on
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            })
            .collect(),
        to_visit: dashboard
            .to_visit
            .iter()
            .map(|p| ToVisitRow {
                name: p.name.clone(),
            })
            .collect(),
        games: dashboard
            .games
            .iter()
            .map(|g| GameRow {
                id: g.id,
                game_date: g.game_date.format("%Y-%m-%d").to_string(),
                host_name: g.host_name.clone(),
                winner_name: g.winner_name.clone(),
                second_place_name: g.second_place_name.clone(),
            })
            .collect(),
        all_players: dashboard
            .all_players
            .iter()
            .map(|p| PlayerOption {
                id: p.id,
                name: p.name.clone(),
            })
            .collect(),
        current_date: now.format("%Y-%m-%d").to_string(),
        current_year: now.year(),
    }
}

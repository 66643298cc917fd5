pub mod backend_health_handler;
pub mod game_handler;
pub mod home_handler;
pub mod season_handler;

use actix_web::HttpResponse;
use askama::Template;

/// Render a template to an HTML response; render failures become a
/// generic 500 with the cause logged server-side only.
pub(crate) fn render_html<T: Template>(template: &T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            tracing::error!("Template rendering failed: {}", e);
            HttpResponse::InternalServerError().body("Failed to render page")
        }
    }
}

use actix_web::web;

pub mod backend_health;
pub mod game;
pub mod home;
pub mod season;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::home)
        .service(backend_health::backend_health)
        .service(season::season_page)
        .service(web::resource("/game/add").route(web::post().to(game::add_game)))
        .service(
            web::resource("/game/update_date").route(web::post().to(game::update_game_date)),
        );
}

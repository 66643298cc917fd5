pub mod game_queries;
pub mod player_queries;
pub mod season_queries;

pub use game_queries::GameQueries;
pub use player_queries::PlayerQueries;
pub use season_queries::SeasonQueries;

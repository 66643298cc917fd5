use sqlx::PgPool;

use crate::db::{GameQueries, PlayerQueries, SeasonQueries};
use crate::models::poker::{Player, PlayerStatus, Season, SeasonGame};

/// View model for the season page.
#[derive(Debug, Clone)]
pub struct SeasonDashboard {
    pub seasons: Vec<Season>,
    pub current_season: Option<Season>,
    pub visited: Vec<PlayerStatus>,
    pub to_visit: Vec<PlayerStatus>,
    pub games: Vec<SeasonGame>,
    pub all_players: Vec<Player>,
    pub is_latest_season: bool,
}

/// Assembles the season page from the query layer.
#[derive(Debug, Clone)]
pub struct DashboardService {
    seasons: SeasonQueries,
    players: PlayerQueries,
    games: GameQueries,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            seasons: SeasonQueries::new(pool.clone()),
            players: PlayerQueries::new(pool.clone()),
            games: GameQueries::new(pool),
        }
    }

    /// Build the dashboard for one season.
    ///
    /// The four reads run sequentially on the shared pool without a common
    /// snapshot; a write that lands between them can show up in some lists
    /// and not others. Acceptable for a single-operator deployment.
    pub async fn season_dashboard(&self, season_id: i32) -> Result<SeasonDashboard, sqlx::Error> {
        let seasons = self.seasons.all_seasons().await?;
        let players = self.players.season_player_status(season_id).await?;
        let games = self.games.season_games(season_id).await?;
        let all_players = self.players.all_players().await?;

        let current_season = seasons.iter().find(|s| s.id == season_id).cloned();
        let is_latest_season = latest_season_id(&seasons) == Some(season_id);
        let (visited, to_visit) = split_by_hosting_status(players);

        Ok(SeasonDashboard {
            seasons,
            current_season,
            visited,
            to_visit,
            games,
            all_players,
            is_latest_season,
        })
    }
}

/// The latest season is the one with the highest id, not the first in the
/// creation-time ordering. The two can disagree when ids were assigned out
/// of creation order (e.g. after an import).
pub fn latest_season_id(seasons: &[Season]) -> Option<i32> {
    seasons.iter().map(|s| s.id).max()
}

/// Split season members into players who already hosted and players still
/// to visit. Hosted players come back ordered by their hosting date
/// (earliest first), the rest by when they were added.
pub fn split_by_hosting_status(
    players: Vec<PlayerStatus>,
) -> (Vec<PlayerStatus>, Vec<PlayerStatus>) {
    let (mut visited, mut to_visit): (Vec<_>, Vec<_>) =
        players.into_iter().partition(|p| p.has_hosted());

    visited.sort_by_key(|p| (p.hosted_on, p.id));
    to_visit.sort_by_key(|p| (p.created_at, p.id));

    (visited, to_visit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn season(id: i32, created_day: u32) -> Season {
        Season {
            id,
            name: format!("Season {}", id),
            created_at: Utc.with_ymd_and_hms(2025, 1, created_day, 12, 0, 0).unwrap(),
        }
    }

    fn member(id: i32, created_day: u32, hosted_on: Option<(i32, u32, u32)>) -> PlayerStatus {
        PlayerStatus {
            id,
            name: format!("Player {}", id),
            created_at: Utc.with_ymd_and_hms(2025, 3, created_day, 9, 0, 0).unwrap(),
            hosted_on: hosted_on.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
        }
    }

    #[test]
    fn latest_season_is_highest_id_not_newest_created() {
        // id 7 was created before id 3: max(id) wins regardless.
        let seasons = vec![season(3, 20), season(7, 5)];
        assert_eq!(latest_season_id(&seasons), Some(7));
    }

    #[test]
    fn latest_season_of_empty_listing_is_none() {
        assert_eq!(latest_season_id(&[]), None);
    }

    #[test]
    fn split_partitions_by_hosting_status() {
        let players = vec![
            member(1, 1, Some((2025, 6, 10))),
            member(2, 2, None),
            member(3, 3, Some((2025, 6, 1))),
            member(4, 4, None),
        ];

        let (visited, to_visit) = split_by_hosting_status(players);

        assert_eq!(
            visited.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![3, 1],
            "hosted players ordered by hosting date ascending"
        );
        assert_eq!(
            to_visit.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 4],
            "remaining players ordered by creation time ascending"
        );
        assert!(visited.iter().all(|p| p.has_hosted()));
        assert!(to_visit.iter().all(|p| !p.has_hosted()));
    }

    #[test]
    fn to_visit_orders_by_creation_not_id() {
        let players = vec![member(9, 1, None), member(2, 5, None)];
        let (_, to_visit) = split_by_hosting_status(players);
        assert_eq!(to_visit.iter().map(|p| p.id).collect::<Vec<_>>(), vec![9, 2]);
    }

    #[test]
    fn same_hosting_date_breaks_tie_by_id() {
        let players = vec![
            member(5, 1, Some((2025, 6, 1))),
            member(2, 2, Some((2025, 6, 1))),
        ];
        let (visited, _) = split_by_hosting_status(players);
        assert_eq!(visited.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 5]);
    }

    #[test]
    fn all_members_unhosted_in_fresh_season() {
        let players = vec![member(1, 1, None), member(2, 2, None), member(3, 3, None)];
        let (visited, to_visit) = split_by_hosting_status(players);
        assert!(visited.is_empty());
        assert_eq!(to_visit.len(), 3);
    }
}

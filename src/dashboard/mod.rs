pub mod page;

pub use page::{latest_season_id, split_by_hosting_status, DashboardService, SeasonDashboard};

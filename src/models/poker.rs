use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Season {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A game as stored. Winner and second place are unknown until the game
/// has actually been played, hence the optional references.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Game {
    pub id: i32,
    pub season_id: i32,
    pub host_id: i32,
    pub winner_id: Option<i32>,
    pub second_place_id: Option<i32>,
    pub game_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A game row from the season listing join, with player names resolved.
/// The join requires winner and second place to be present, so all
/// references here are non-null.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct SeasonGame {
    pub id: i32,
    pub season_id: i32,
    pub host_id: i32,
    pub winner_id: i32,
    pub second_place_id: i32,
    pub game_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub host_name: String,
    pub winner_name: String,
    pub second_place_name: String,
}

/// A season member annotated with hosting status. `hosted_on` is the date
/// of the player's earliest hosted game in the season, if any.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerStatus {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub hosted_on: Option<NaiveDate>,
}

impl PlayerStatus {
    pub fn has_hosted(&self) -> bool {
        self.hosted_on.is_some()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GameFormError {
    #[error("invalid {field}: '{value}'")]
    InvalidId { field: &'static str, value: String },
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

fn parse_id(field: &'static str, value: &str) -> Result<i32, GameFormError> {
    value.trim().parse::<i32>().map_err(|_| GameFormError::InvalidId {
        field,
        value: value.to_string(),
    })
}

/// An unselected `<select>` posts an empty string, which means "absent".
fn parse_optional_id(
    field: &'static str,
    value: &Option<String>,
) -> Result<Option<i32>, GameFormError> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => parse_id(field, raw).map(Some),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, GameFormError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| GameFormError::InvalidDate(value.to_string()))
}

/// Raw add-game form fields as submitted by the dashboard.
#[derive(Debug, Deserialize)]
pub struct AddGameForm {
    pub season_id: String,
    pub host_id: String,
    #[serde(default)]
    pub winner_id: Option<String>,
    #[serde(default)]
    pub second_place_id: Option<String>,
    pub game_date: String,
}

/// A fully parsed add-game command.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub season_id: i32,
    pub host_id: i32,
    pub winner_id: Option<i32>,
    pub second_place_id: Option<i32>,
    pub game_date: NaiveDate,
}

impl AddGameForm {
    pub fn parse(&self) -> Result<NewGame, GameFormError> {
        Ok(NewGame {
            season_id: parse_id("season_id", &self.season_id)?,
            host_id: parse_id("host_id", &self.host_id)?,
            winner_id: parse_optional_id("winner_id", &self.winner_id)?,
            second_place_id: parse_optional_id("second_place_id", &self.second_place_id)?,
            game_date: parse_date(&self.game_date)?,
        })
    }
}

/// Raw update-game-date form fields.
#[derive(Debug, Deserialize)]
pub struct UpdateGameDateForm {
    pub game_id: String,
    pub season_id: String,
    pub new_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameDateUpdate {
    pub game_id: i32,
    pub season_id: i32,
    pub new_date: NaiveDate,
}

impl UpdateGameDateForm {
    pub fn parse(&self) -> Result<GameDateUpdate, GameFormError> {
        Ok(GameDateUpdate {
            game_id: parse_id("game_id", &self.game_id)?,
            season_id: parse_id("season_id", &self.season_id)?,
            new_date: parse_date(&self.new_date)?,
        })
    }
}

//! Seeds the database with a few seasons of plausible demo data.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use pokerhans_backend::config::settings::get_config;
use pokerhans_backend::db::GameQueries;
use pokerhans_backend::models::poker::NewGame;
use pokerhans_backend::telemetry::{get_subscriber, init_subscriber};

const SEASONS: &[(&str, (i32, u32, u32))] = &[
    ("Winter 2024", (2024, 11, 1)),
    ("Spring 2025", (2025, 2, 1)),
    ("Summer 2025", (2025, 5, 1)),
    ("Fall 2025", (2025, 8, 1)),
];

const PLAYER_NAMES: &[&str] = &[
    "Max Mustermann",
    "Lisa Schmidt",
    "Jonas Weber",
    "Anna Müller",
    "Felix König",
    "Sophie Becker",
    "Lukas Hoffmann",
    "Emma Fischer",
    "Paul Wagner",
    "Laura Schneider",
    "Tim Meyer",
    "Julia Schulz",
    "Nico Bauer",
    "Lena Schäfer",
    "David Klein",
    "Marie Richter",
    "Fabian Wolf",
    "Nina Braun",
    "Philipp Zimmermann",
    "Katja Schwarz",
];

#[tokio::main]
async fn main() -> Result<(), sqlx::Error> {
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber("demogen".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(config.database.connection_string().expose_secret())
        .await?;

    let player_ids = insert_players(&pool).await?;
    tracing::info!("Created {} players", player_ids.len());

    let games = GameQueries::new(pool.clone());
    let mut rng = rand::thread_rng();

    for (name, (year, month, day)) in SEASONS {
        let season_id = insert_season(&pool, name).await?;

        // Enroll a random subset of players in this season
        let mut members = player_ids.clone();
        members.shuffle(&mut rng);
        members.truncate(rng.gen_range(8..=12));
        for player_id in &members {
            sqlx::query("INSERT INTO season_players (season_id, player_id) VALUES ($1, $2)")
                .bind(season_id)
                .bind(player_id)
                .execute(&pool)
                .await?;
        }
        tracing::info!("Created season {} with {} members", name, members.len());

        // Roughly half the members have hosted already, two weeks apart
        let start = NaiveDate::from_ymd_opt(*year, *month, *day).expect("valid season start");
        let host_count = members.len() / 2;
        for (i, host_id) in members.iter().take(host_count).enumerate() {
            let game_date = start + Duration::weeks(2 * i as i64);
            let (winner_id, second_place_id) = pick_placings(&members, *host_id, &mut rng);

            games
                .add_game(&NewGame {
                    season_id,
                    host_id: *host_id,
                    winner_id,
                    second_place_id,
                    game_date,
                })
                .await?;
        }
        tracing::info!("Created {} games for season {}", host_count, name);
    }

    Ok(())
}

async fn insert_players(pool: &PgPool) -> Result<Vec<i32>, sqlx::Error> {
    let mut ids = Vec::with_capacity(PLAYER_NAMES.len());
    for name in PLAYER_NAMES {
        let (id,): (i32,) = sqlx::query_as("INSERT INTO players (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(pool)
            .await?;
        ids.push(id);
    }
    Ok(ids)
}

async fn insert_season(pool: &PgPool, name: &str) -> Result<i32, sqlx::Error> {
    let (id,): (i32,) = sqlx::query_as("INSERT INTO seasons (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

/// Pick winner and second place among the other members. Now and then a
/// game is left without a recorded outcome, as happens with games entered
/// ahead of time.
fn pick_placings(
    members: &[i32],
    host_id: i32,
    rng: &mut impl Rng,
) -> (Option<i32>, Option<i32>) {
    if rng.gen_bool(0.15) {
        return (None, None);
    }

    let mut others: Vec<i32> = members.iter().copied().filter(|id| *id != host_id).collect();
    others.shuffle(rng);
    (others.first().copied(), others.get(1).copied())
}

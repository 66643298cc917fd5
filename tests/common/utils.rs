use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use secrecy::ExposeSecret;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

use pokerhans_backend::config::settings::{get_config, DatabaseSettings};
use pokerhans_backend::run;
use pokerhans_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    let connection_pool = configure_db(&configuration.database).await;

    let server = run(listener, connection_pool.clone()).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create a throwaway database
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate it
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// A reqwest client that surfaces redirects instead of following them.
pub fn client_without_redirects() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build client")
}

// Seed helpers. Creation timestamps are passed explicitly so that
// ordering assertions are deterministic.

pub async fn insert_season(pool: &PgPool, name: &str, created_at: DateTime<Utc>) -> i32 {
    let (id,): (i32,) =
        sqlx::query_as("INSERT INTO seasons (name, created_at) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(created_at)
            .fetch_one(pool)
            .await
            .expect("Failed to insert season");
    id
}

/// Insert a season with an explicit id, for exercising the latest-season
/// rule under ids that are not monotonic with creation time.
pub async fn insert_season_with_id(
    pool: &PgPool,
    id: i32,
    name: &str,
    created_at: DateTime<Utc>,
) -> i32 {
    sqlx::query("INSERT INTO seasons (id, name, created_at) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(name)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("Failed to insert season");
    id
}

pub async fn insert_player(pool: &PgPool, name: &str, created_at: DateTime<Utc>) -> i32 {
    let (id,): (i32,) =
        sqlx::query_as("INSERT INTO players (name, created_at) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(created_at)
            .fetch_one(pool)
            .await
            .expect("Failed to insert player");
    id
}

pub async fn enroll_player(pool: &PgPool, season_id: i32, player_id: i32) {
    sqlx::query("INSERT INTO season_players (season_id, player_id) VALUES ($1, $2)")
        .bind(season_id)
        .bind(player_id)
        .execute(pool)
        .await
        .expect("Failed to enroll player");
}

pub async fn insert_game(
    pool: &PgPool,
    season_id: i32,
    host_id: i32,
    winner_id: Option<i32>,
    second_place_id: Option<i32>,
    game_date: NaiveDate,
) -> i32 {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO games (season_id, host_id, winner_id, second_place_id, game_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(season_id)
    .bind(host_id)
    .bind(winner_id)
    .bind(second_place_id)
    .bind(game_date)
    .fetch_one(pool)
    .await
    .expect("Failed to insert game");
    id
}

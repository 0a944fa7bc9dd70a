// tests/common/mod.rs

#![allow(dead_code)]

use quiz_board::{
    config::Config,
    db::{self, Backend},
    routes,
    state::AppState,
};
use sqlx::AnyPool;

pub struct TestApp {
    pub address: String,
    pub pool: AnyPool,
}

/// Fresh, migrated SQLite file in the temp dir.
pub async fn test_pool() -> AnyPool {
    let path = std::env::temp_dir().join(format!("quiz_board_test_{}.db", uuid::Uuid::new_v4()));
    let url = format!("sqlite://{}", path.display());
    migrated_pool(&url, Backend::Sqlite).await
}

pub async fn migrated_pool(url: &str, backend: Backend) -> AnyPool {
    let pool = db::connect(url)
        .await
        .expect("Failed to open test database");

    db::migrate(&pool, backend)
        .await
        .expect("Failed to migrate database");

    pool
}

/// Spawns the app on a random port.
/// Returns the base URL (e.g., "http://127.0.0.1:12345") and the pool behind it.
pub async fn spawn_app() -> TestApp {
    let pool = test_pool().await;

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        rust_log: "error".to_string(),
        log_dir: std::env::temp_dir().display().to_string(),
        seed_sample_data: false,
        cors_origins: vec!["http://localhost:5000".to_string()],
    };

    let state = AppState {
        pool: pool.clone(),
        config,
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp { address, pool }
}

/// Client that reports redirects instead of following them.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

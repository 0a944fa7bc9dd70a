// src/main.rs

use std::time::Duration;

use dotenvy::dotenv;
use quiz_board::config::Config;
use quiz_board::db::Backend;
use quiz_board::state::AppState;
use quiz_board::{db, routes, seed};
use sqlx::AnyPool;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let backend = Backend::from_url(&config.database_url)?;
    let pool = connect_with_retry(&config.database_url).await?;
    tracing::info!(?backend, "Database connected...");

    tracing::info!("Running migrations...");
    db::migrate(&pool, backend).await?;
    tracing::info!("Migrations applied successfully.");

    if config.seed_sample_data {
        if let Err(e) = seed::seed_sample_data(&pool).await {
            tracing::error!("Failed to seed sample data: {}", e);
        }
    }

    let addr = config.bind_address.clone();
    let state = AppState { pool, config };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn connect_with_retry(database_url: &str) -> Result<AnyPool, sqlx::Error> {
    let mut retry_count = 0;
    loop {
        match db::connect(database_url).await {
            Ok(pool) => return Ok(pool),
            Err(e) if retry_count < 5 => {
                retry_count += 1;
                tracing::warn!(
                    "Database not ready, retrying in 2s... (Attempt {}): {}",
                    retry_count,
                    e
                );
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
            Err(e) => return Err(e),
        }
    }
}

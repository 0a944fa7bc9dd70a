// src/db.rs

use std::time::Duration;

use sqlx::{AnyPool, any::AnyPoolOptions};

/// Store selected by the scheme of `DATABASE_URL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(database_url: &str) -> Result<Self, sqlx::Error> {
        if database_url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else {
            Err(sqlx::Error::Configuration(
                format!("unsupported DATABASE_URL scheme: {}", database_url).into(),
            ))
        }
    }
}

/// SQLite files are opened read-write-create unless the URL picks a mode.
fn with_create_mode(database_url: &str) -> String {
    if database_url.contains(":memory:") || database_url.contains("mode=") {
        return database_url.to_string();
    }
    let separator = if database_url.contains('?') { '&' } else { '?' };
    format!("{}{}mode=rwc", database_url, separator)
}

/// Opens a pool for a SQLite or Postgres URL.
pub async fn connect(database_url: &str) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let url = match Backend::from_url(database_url)? {
        Backend::Sqlite => with_create_mode(database_url),
        Backend::Postgres => database_url.to_string(),
    };

    AnyPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&url)
        .await
}

/// Applies the embedded migrations for the given backend.
pub async fn migrate(pool: &AnyPool, backend: Backend) -> Result<(), sqlx::migrate::MigrateError> {
    match backend {
        Backend::Sqlite => sqlx::migrate!("./migrations/sqlite").run(pool).await,
        Backend::Postgres => sqlx::migrate!("./migrations/postgres").run(pool).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_follows_url_scheme() {
        assert_eq!(Backend::from_url("sqlite://app.db").unwrap(), Backend::Sqlite);
        assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
        assert_eq!(
            Backend::from_url("postgres://quiz:secret@db:5432/quiz").unwrap(),
            Backend::Postgres
        );
        assert_eq!(
            Backend::from_url("postgresql://localhost/quiz").unwrap(),
            Backend::Postgres
        );
        assert!(Backend::from_url("mysql://localhost/quiz").is_err());
    }

    #[test]
    fn sqlite_files_are_created_on_demand() {
        assert_eq!(with_create_mode("sqlite://app.db"), "sqlite://app.db?mode=rwc");
        assert_eq!(
            with_create_mode("sqlite://app.db?cache=shared"),
            "sqlite://app.db?cache=shared&mode=rwc"
        );
        assert_eq!(with_create_mode("sqlite://app.db?mode=ro"), "sqlite://app.db?mode=ro");
        assert_eq!(with_create_mode("sqlite::memory:"), "sqlite::memory:");
    }
}

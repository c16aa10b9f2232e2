use secrecy::ExposeSecret;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::time::Duration;

use crate::config::Config;

#[cfg(test)]
pub mod memory;
pub mod store;

pub use store::{CardStore, PgCardStore, StoreError};

/// Builds the connection options from the individual `db_*` settings
pub fn connect_options(config: &Config) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(config.db_pass.expose_secret())
        .database(&config.db_name)
}

/// Creates the pool shared by all requests. Every statement checks a
/// connection out and returns it when done, so writes commit on their own.
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(connect_options(config))
        .await
}

use secrecy::Secret;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // PostgreSQL
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_pass: Secret<String>,
    pub db_name: String,
    pub db_max_connections: u32,

    // Security
    pub secret_key: Secret<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists (for local development)
        let _ = dotenvy::dotenv();

        let config = config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8000)?
            .set_default("db_port", 5432)?
            .set_default("db_max_connections", 5)?
            .add_source(config::Environment::default().separator("__"))
            .build()?;

        Ok(Self {
            host: config.get("host")?,
            port: config.get("port")?,

            db_host: config.get("db_host")?,
            db_port: config.get("db_port")?,
            db_user: config.get("db_user")?,
            db_pass: Secret::new(config.get("db_pass")?),
            db_name: config.get("db_name")?,
            db_max_connections: config.get("db_max_connections")?,

            secret_key: Secret::new(config.get("secret_key")?),
        })
    }
}

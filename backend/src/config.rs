use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub run_migrations: bool,
    pub server_addr: String,
    /// Directory uploaded images are written to. Also the prefix of every
    /// stored image reference.
    pub image_dir: String,
    pub max_upload_bytes: usize,
    pub log_filter: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("database_url", "sqlite://db.sqlite3")?
            .set_default("run_migrations", true)?
            .set_default("server_addr", "127.0.0.1:8000")?
            .set_default("image_dir", "images")?
            .set_default("max_upload_bytes", 10 * 1024 * 1024_i64)?
            .set_default("log_filter", "info,sqlx=warn")?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::default())
            .build()?;

        s.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://db.sqlite3".to_string(),
            run_migrations: true,
            server_addr: "127.0.0.1:8000".to_string(),
            image_dir: "images".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            log_filter: "info,sqlx=warn".to_string(),
        }
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings: built-in defaults, then an optional `quiz-service.toml`,
/// then environment variables (`DB_PATH`, `HOST`, `PORT`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::build(Environment::default())
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("db_path", "quiz-service.db")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .add_source(File::with_name("quiz-service").required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

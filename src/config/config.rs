use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct AppConfig {
    pub base: BaseConfig,
    pub search: SearchConfig,
    pub store: StoreConfig,
    pub batch: BatchConfig,
}

#[derive(Deserialize)]
pub struct BaseConfig {
    pub name: String,
    pub version: String,
}

#[derive(Deserialize)]
pub struct SearchConfig {
    pub url_template: String,
    pub user_agent: String,
}

#[derive(Deserialize)]
pub struct StoreConfig {
    pub file: String,
}

#[derive(Deserialize)]
pub struct BatchConfig {
    pub min_delay: u64,
    pub max_delay: u64,
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::new("Settings.toml", config::FileFormat::Toml))
        .add_source(Environment::with_prefix("APP"))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}

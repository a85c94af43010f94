use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Absolute URL or a path relative to `site_origin`.
    pub api_base_url: String,
    pub site_origin: Url,
    pub token_path: PathBuf,
    pub language: String,
    pub debug: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Load from environment variables with APP_ prefix
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .set_default("api_base_url", "/api")?
            .set_default("site_origin", "http://localhost:3000")?
            .set_default("token_path", ".edulab_token")?
            .set_default("language", "uz")?
            .set_default("debug", false)?
            .build()?;

        config.try_deserialize()
    }

    pub fn api_base(&self) -> Result<Url, url::ParseError> {
        match Url::parse(&self.api_base_url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self.site_origin.join(&self.api_base_url),
            Err(err) => Err(err),
        }
    }
}

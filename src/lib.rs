pub mod accessor;
pub mod api;
pub mod cli;
pub mod error;
pub mod models;
pub mod pages;
pub mod routes;
pub mod settings;
pub mod token_store;
pub mod validation;

use std::sync::Arc;

use clap::Parser;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::cli::Cli;
use crate::models::Language;
use crate::pages::PageContext;
use crate::settings::Settings;
use crate::token_store::FileTokenStore;

pub fn build_context(settings: &Settings, lang: Option<Language>) -> Result<PageContext, url::ParseError> {
    let base_url = settings.api_base()?;
    let store = Arc::new(FileTokenStore::new(settings.token_path.clone()));
    let client = Arc::new(ApiClient::new(base_url, store));

    let lang = lang.unwrap_or_else(|| {
        settings.language.parse().unwrap_or_else(|err| {
            warn!("{err}; falling back to uz");
            Language::default()
        })
    });
    Ok(PageContext::new(client, lang))
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let ctx = build_context(&settings, cli.lang)?;
    debug!(api = %ctx.client.base_url(), lang = %ctx.lang, "client ready");

    cli::execute(&ctx, cli.command).await
}

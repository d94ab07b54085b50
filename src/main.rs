//! Phonebook converter - Main entry point
//!
//! Reads contacts from a local JSON document, converts them into appliance
//! phonebook entries and writes the phonebook as JSON to stdout.

use anyhow::{Context, Result};
use phonebook_converter::conversion::{ConfigFile, Converter};
use phonebook_converter::services::{PhonebookService, PhonebookServiceImpl};
use phonebook_converter::sources::{ContactSource, JsonFileSource};
use phonebook_converter::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = Config::from_env();

    // Logging goes to stderr; stdout carries the phonebook document.
    // RUST_LOG overrides LOG_LEVEL.
    let level = settings
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match settings {
        Ok(cfg) => {
            info!(log_level = %cfg.log_level, "Settings loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return Err(e.into());
        }
    };

    let file = ConfigFile::load(&config.config_path).with_context(|| {
        format!(
            "Invalid conversion configuration {}",
            config.config_path.display()
        )
    })?;
    let converter = Arc::new(Converter::new(file.conversion)?);

    let source = Arc::new(JsonFileSource::new(&config.contacts_path)) as Arc<dyn ContactSource>;
    let service = PhonebookServiceImpl::new(source, converter, file.phonebook, config.workers);

    info!(workers = config.workers, "Starting conversion");
    let phonebook = service.build_phonebook().await?;

    let document = serde_json::to_string_pretty(&phonebook)?;
    println!("{}", document);

    info!(
        entries = phonebook.entries.len(),
        shortcuts = phonebook.shortcut_count(),
        "Phonebook written"
    );
    Ok(())
}

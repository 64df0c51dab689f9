use anyhow::Result;
use clap::Parser;
use tracing::info;

use number_quest::{config::Args, hint, logging::init_logging, store, ui::run_ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Args::parse().into_config()?;

    let log_dir = match &config.log_dir {
        Some(dir) => dir.clone(),
        None => store::data_dir()?,
    };
    let _log_guard = init_logging(&log_dir, &config.log_filter)?;
    info!(version = env!("CARGO_PKG_VERSION"), "number-quest starting");

    let store = store::open_store(&config.store).await?;
    let hints = hint::build_provider(config.gemini.clone());

    let result = run_ui(store, hints, config.hint_timeout);

    info!("number-quest exiting");
    result
}

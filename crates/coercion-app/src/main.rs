use clap::Parser;
use coercion_convert::Coercer;
use coercion_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let coercer = Coercer::from_settings(&config)?;

    let mut failures = 0_usize;
    for line in cli.run(&coercer) {
        match line {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                failures += 1;
                eprintln!("error: {e:#}");
            }
        }
    }

    if failures > 0 {
        tracing::info!(failures, total = cli.values.len(), "Some values could not be converted");
        std::process::exit(1);
    }

    Ok(())
}

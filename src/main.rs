//! logdispatch - formats an activity log and delivers it through a channel.

use anyhow::Result;
use clap::Parser;
use logdispatch::{
    cli::Cli,
    config::Config,
    render_receipt,
    rows::load_rows,
    services::{default_registry, setup_dispatcher},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        init_tracing("error");
        error!("Failed to load configuration: {}", err);
        std::process::exit(1);
    });

    init_tracing(&config.log_level);

    info!("logdispatch starting up...");
    info!("-------------------- Configuration --------------------");
    info!("Log Level: {}", config.log_level);
    info!("Default Channel: {}", config.default_channel);
    info!("Output Format: {}", config.output.format);
    info!("Email Subject: {}", config.email.subject);
    info!("Rows File: {}", cli.rows.display());
    info!("-------------------------------------------------------");

    let rows = load_rows(&cli.rows)?;
    let registry = default_registry(&config);
    let dispatcher = setup_dispatcher(&config, &registry)?;

    let receipt = dispatcher.dispatch(&rows, &cli.recipient()).await?;
    println!("{}", render_receipt(&receipt, config.output.format)?);

    Ok(())
}

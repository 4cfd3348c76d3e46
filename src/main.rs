use anyhow::Result;
use clap::Parser;
use log::info;

use plantlog::cli::{Cli, Commands};
use plantlog::commands;
use plantlog::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("plantlog.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let config = Config::load()?;
    let cli = Cli::parse();
    info!("Starting plantlog");

    match cli.command {
        Some(Commands::Report(args)) => commands::report::run(&config, args).await?,
        Some(Commands::Panel(args)) => commands::panel::run(&config, args)?,
        Some(Commands::Compressor(args)) => commands::compressor::run(&config, args)?,
        Some(Commands::Chiller(args)) => commands::chiller::run(&config, args)?,
        Some(Commands::History(args)) => commands::history::run(&config, args)?,
        Some(Commands::Export(args)) => commands::export::run(&config, args)?,
        None => commands::dashboard::run(&config).await?,
    }

    Ok(())
}

use anyhow::Context;
use clap::Parser;
use marina_ledger::app::menu::Menu;
use marina_ledger::utils::{logger, validation::Validate};
use marina_ledger::{CliConfig, LocalStorage, MarinaConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => MarinaConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?,
        None => MarinaConfig::default(),
    }
    .with_capacity_override(cli.capacity);

    logger::init_cli_logger(cli.verbose, config.log_level());
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate().and_then(|_| config.validate()) {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("{}", e.recovery_suggestion());
        std::process::exit(1);
    }

    println!("Welcome to the Boat Management System");
    println!("-------------------------------------");

    let storage = LocalStorage::default();
    let mut inventory = match marina_ledger::load(&storage, &cli.data_file, config.new_inventory())
    {
        Ok((inventory, report)) => {
            if report.full {
                println!("Marina is full!");
            }
            inventory
        }
        Err(e) => {
            tracing::warn!("Could not load {}: {}", cli.data_file.display(), e);
            println!("Failed to open file.");
            config.new_inventory()
        }
    };

    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(&mut inventory, stdin.lock(), stdout.lock())
            .run()
            .context("menu session failed")?;
    }

    marina_ledger::save(&storage, &cli.data_file, &inventory)
        .with_context(|| format!("failed to save data to '{}'", cli.data_file.display()))?;
    println!("Exiting the Boat Management System");

    Ok(())
}

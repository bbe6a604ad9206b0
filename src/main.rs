use anyhow::Context;
use clap::Parser;

use reactive_counter::args::Cli;
use reactive_counter::config::{Config, ConfigError};
use reactive_counter::logging::init_tracing;
use reactive_counter::shutdown::ShutdownCoordinator;
use reactive_counter::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();

    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml().context("failed to serialize config")?);
        return Ok(());
    }

    init_tracing(&config.logging.level, &config.log_path(&config_path))?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        overflow = ?config.counter.overflow,
        "starting reactive-counter"
    );

    let shutdown = ShutdownCoordinator::new();
    shutdown
        .install_signal_handlers()
        .context("failed to register signal handlers")?;

    ui::run(&config, &shutdown).context("terminal UI failed")?;
    tracing::info!("exited cleanly");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

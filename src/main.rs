use anyhow::Context;
use clap::Parser;
use tally::cli::Cli;
use tally::config::Config;
use tally::headless;
use tally::logging::{init_tracing, LogTarget};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)?;
    cli.apply(&mut config);
    config.validate()?;

    if let Some(script) = &cli.press {
        init_tracing(&config.logging.level, LogTarget::Stderr)?;
        let view = headless::run(script, &config.ui.heading)?;
        println!("{}", headless::format_view(&view, cli.format.unwrap_or_default()));
        return Ok(());
    }

    let log_path = config.logging.file_path();
    init_tracing(&config.logging.level, LogTarget::File(&log_path))
        .with_context(|| format!("cannot log to '{}'", log_path.display()))?;
    tracing::info!(config = %config_path.display(), "Starting tally");

    tally::ui::runtime::run(&config).context("terminal UI failed")?;
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use counter_echo::cli::Cli;
use counter_echo::config::Config;
use counter_echo::logging::init_tracing;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config().context("loading configuration")?;

    if cli.check_config {
        print_config_summary(&cli, &config);
        return Ok(());
    }

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(
        title = %config.app.title,
        tick_rate_ms = config.app.tick_rate_ms,
        overflow = ?config.counter.overflow,
        log_file = ?log_path,
        "starting"
    );

    counter_echo::ui::run(&config).context("running terminal UI")?;
    tracing::info!("shutdown complete");
    Ok(())
}

fn print_config_summary(cli: &Cli, config: &Config) {
    let source = match &cli.config {
        Some(path) => path.display().to_string(),
        None => {
            let path = Config::config_path();
            if path.exists() {
                path.display().to_string()
            } else {
                "defaults".to_string()
            }
        }
    };
    println!("Config OK ({source})");
    println!("  title: {}", config.app.title);
    println!("  tick_rate_ms: {}", config.app.tick_rate_ms);
    println!("  overflow: {:?}", config.counter.overflow);
    println!(
        "  logging: {} (level {})",
        if config.logging.enabled { "on" } else { "off" },
        config.logging.level
    );
}

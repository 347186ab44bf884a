use anyhow::{ Context, Result };
use clap::Parser;
use dotenv::dotenv;
use log::{ debug, info };
use propbag::{ OutputFormat, PropbagConfig };
mod cli;
use cli::{ Commands, PropbagCli };

fn main() {
    if let Err(e) = run() {
        cli::ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse the command line arguments
    let cli = PropbagCli::parse();

    // A .env file may provide PROPBAG_CONFIG
    let env_loaded = dotenv().is_ok();

    let config = PropbagConfig::resolve(cli.config.as_deref())
        .context("Failed to load configuration")?;

    // Setup logging: flag, then config file, then warn
    let log_level = cli.log_level
        .clone()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "warn".to_string());
    setup_logging(&log_level);
    if env_loaded {
        debug!("Loaded environment variables from .env file");
    }

    let format = match cli.output_format.as_deref() {
        Some(raw) => OutputFormat::parse(raw)?,
        None => config.output_format,
    };

    // Handle commands
    match &cli.command {
        Commands::Show { file, all } => {
            cli::commands::inspect::show(&config, format, file, *all)?;
        }

        Commands::Get { file, name, default } => {
            cli::commands::inspect::get(&config, format, file, name, default.as_deref())?;
        }

        Commands::Set { file, name, value } => {
            cli::commands::edit::set(&config, format, file, name, value)?;
        }

        Commands::Def { file, name, value } => {
            cli::commands::edit::def(&config, format, file, name, value)?;
        }

        Commands::Merge { file, source } => {
            cli::commands::edit::merge(&config, file, source)?;
        }

        Commands::Errors { file, index, last, raw } => {
            cli::commands::inspect::errors(&config, format, file, *index, *last, *raw)?;
        }

        Commands::AddError { file, message, code, kind } => {
            cli::commands::edit::add_error(&config, file, message, *code, kind.as_deref())?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}

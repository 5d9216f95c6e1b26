use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use buttonmash::{Level, solve_level};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Buttonmash - Solve Calculator: The Game levels by brute force
#[derive(Parser, Debug)]
#[command(name = "buttonmash")]
#[command(about = "Find the button sequence that turns a start value into a goal value")]
#[command(version)]
pub struct CliArgs {
    /// Button tokens in row order, e.g. -b +2 x3 "<<" "12=>3"
    #[arg(short, long, required = true, num_args(1..), allow_hyphen_values = true)]
    pub buttons: Vec<String>,

    /// Moves available on the level
    #[arg(short, long)]
    pub moves: u32,

    /// Goal value to reach
    #[arg(short, long)]
    pub goal: i64,

    /// Value on the calculator display at the start
    #[arg(short, long, default_value_t = 0)]
    pub start: i64,

    /// Level number, informational only
    #[arg(short, long, default_value_t = 1)]
    pub index: u32,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub level: Level,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    // Validate the level definition
    let level = Level::new(args.index, args.moves, args.goal, args.start, args.buttons)
        .context("Invalid level definition")?;

    Ok(CliConfig {
        level,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!(
        "Searching {} move sequences over {} buttons for level {}",
        config.level.moves(),
        config.level.buttons().len(),
        config.level.index()
    );

    match solve_level(&config.level)? {
        Some(solution) => {
            println!("{}", solution);
            Ok(())
        }
        None => {
            warn!("Search space exhausted without reaching the goal");
            println!("No solution.");
            Ok(())
        }
    }
}

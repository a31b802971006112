use crate::evaluator::SafeEvaluator;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{info, warn};

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

/// Safecalc - Safely evaluate an arithmetic expression
#[derive(Parser, Debug)]
#[command(name = "safecalc")]
#[command(
    about = "Evaluate an untrusted arithmetic expression without executing anything else"
)]
#[command(version)]
pub struct CliArgs {
    /// Expression to evaluate, e.g. "120 / 3 + 15"
    pub expression: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
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
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    info!("Evaluating expression: '{}'", args.expression);

    let evaluator = SafeEvaluator::new();
    match evaluator.evaluate(&args.expression) {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(e) => {
            warn!("Evaluation failed: {}", e);
            println!("Error: {}", e);
            Ok(())
        }
    }
}

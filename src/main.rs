//! package-assistant - interactive lost package assistant
//!
//! Runs one conversation over stdin/stdout. Logs go to stderr.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use package_assistant::adapters::{ConsoleReader, ConsoleWriter, StdRandomSource};
use package_assistant::application::{ActionHandlers, ConversationController};
use package_assistant::config::{AppConfig, LoggingConfig};

/// package-assistant - check on a lost or delayed package
#[derive(Parser, Debug)]
#[command(name = "package-assistant")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Prefix for generated reference numbers
    #[arg(long)]
    reference_prefix: Option<String>,

    /// Seed for reference numbers (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter (trace, debug, info, warn, error or directives)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the session report as JSON to stderr when the session ends
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Some(prefix) = cli.reference_prefix {
        config.assistant.reference_prefix = prefix;
    }
    if let Some(seed) = cli.seed {
        config.assistant.reference_seed = Some(seed);
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate().context("invalid configuration")?;

    init_tracing(&config.logging);

    let actions = ActionHandlers::new(
        config.assistant.reference_prefix.clone(),
        Box::new(StdRandomSource::from_seed_option(config.assistant.reference_seed)),
    );
    let controller = ConversationController::new(
        Box::new(ConsoleReader::stdin()),
        Box::new(ConsoleWriter::stdout()),
        actions,
    );

    let session_id = controller.session_id();
    tracing::debug!(session_id = %session_id, "session started");

    let report = controller.run().context("conversation aborted")?;
    tracing::info!(
        session_id = %session_id,
        outcome = ?report.outcome,
        escalated = report.outcome.is_escalated(),
        "session finished"
    );

    if cli.summary {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        eprintln!("{}", json);
    }

    // Completed, escalated and abandoned sessions all count as success.
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(logging.env_filter());
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

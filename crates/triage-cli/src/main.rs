//! Triage CLI - routes a task description to an execution strategy.

use anyhow::Result;
use clap::Parser as _;
use cli::Cli;
use tracing_subscriber::EnvFilter;
use triage_core::{ProtectionSource, TriageConfig, TriageEngine};

mod cli;
mod report;

/// Protection source pinned on by the `--protection` flag.
struct ForcedProtection;

impl ProtectionSource for ForcedProtection {
    fn protection_active(&self) -> bool {
        true
    }
}

#[allow(clippy::print_stdout, reason = "CLI report output")]
fn emit(line: &str) {
    println!("{line}");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TriageConfig::load_from_file(path)?,
        None => TriageConfig::load_or_create()?,
    };
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy.into();
    }
    if cli.use_notify && !cli.no_notify {
        config.notify = true;
    } else if cli.no_notify {
        config.notify = false;
    }
    tracing::debug!(strategy = ?config.strategy, notify = config.notify, "configuration resolved");

    let mut engine = TriageEngine::new(config);
    if cli.protection {
        engine = engine.with_protection(Box::new(ForcedProtection));
    }

    if cli.check_protection {
        emit(&report::render_protection(engine.protection_active(), cli.json));
    }

    let Some(task) = &cli.task else {
        return Ok(());
    };

    let triaged = engine.triage(task);
    if cli.json {
        emit(&report::render_json(&triaged, cli.dry_run)?);
    } else {
        emit(&report::render_text(
            &triaged,
            cli.dry_run,
            triaged.protection_mode,
        ));
    }

    Ok(())
}

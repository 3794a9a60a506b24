//! Command-line arguments for the triage binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use triage_core::StrategyKind;

/// Analysis strategy selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Pure-structural analysis with an ambiguity detector
    Structural,
    /// Weighted bilingual keyword scoring into ten categories
    Category,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Structural => Self::Structural,
            StrategyArg::Category => Self::Category,
        }
    }
}

/// Route a task description to an execution strategy.
#[derive(Debug, Parser)]
#[command(name = "triage", version, about)]
pub struct Cli {
    /// Task description to triage
    #[arg(long, required_unless_present = "check_protection")]
    pub task: Option<String>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Override the configured analysis strategy
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Print the current protection state
    #[arg(long)]
    pub check_protection: bool,

    /// Analyze and report without acting on the result
    #[arg(long)]
    pub dry_run: bool,

    /// Use the notification-capable delegation path
    #[arg(long)]
    pub use_notify: bool,

    /// Force the plain delegation path
    #[arg(long)]
    pub no_notify: bool,

    /// Treat cost protection as active regardless of persisted state
    #[arg(long)]
    pub protection: bool,

    /// Load configuration from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

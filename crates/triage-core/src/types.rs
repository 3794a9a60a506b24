//! Shared enums for the triage pipeline.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Ordinal task complexity driving worker tier and decision thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Single-step, conversational or trivially scoped
    Simple,
    /// A few steps or a moderately scoped change
    Normal,
    /// Multi-step, cross-cutting, or structurally dense
    Complex,
}

impl Complexity {
    /// Numeric rank (1-3), used in reasoning strings and reports.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Simple => 1,
            Self::Normal => 2,
            Self::Complex => 3,
        }
    }
}

impl Display for Complexity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Simple => write!(formatter, "simple"),
            Self::Normal => write!(formatter, "normal"),
            Self::Complex => write!(formatter, "complex"),
        }
    }
}

/// How an incoming task should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Answer in the current session without delegating
    ExecuteDirect,
    /// Delegate to a worker with a time budget
    Spawn,
    /// The task is too ambiguous to route; ask the requester to clarify
    AskUser,
}

impl Display for Recommendation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ExecuteDirect => write!(formatter, "execute_direct"),
            Self::Spawn => write!(formatter, "spawn"),
            Self::AskUser => write!(formatter, "ask_user"),
        }
    }
}

/// Class of delegated compute for a spawned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerTier {
    /// No delegation (direct execution or clarification)
    None,
    /// Cheaper, faster worker for normal-complexity tasks
    Light,
    /// Expensive worker reserved for complex tasks
    Heavy,
}

impl Display for WorkerTier {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => write!(formatter, "none"),
            Self::Light => write!(formatter, "light"),
            Self::Heavy => write!(formatter, "heavy"),
        }
    }
}

/// Relative processing cost of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    /// No delegation cost
    Low,
    /// Light-tier worker cost
    Medium,
    /// Heavy-tier worker cost
    High,
}

impl Display for CostTier {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Low => write!(formatter, "low"),
            Self::Medium => write!(formatter, "medium"),
            Self::High => write!(formatter, "high"),
        }
    }
}

/// Topical category assigned by the keyword strategy.
///
/// The enumeration order is significant: score ties resolve to the first
/// variant in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Greetings, acknowledgements, opinions, short questions
    Conversation,
    /// Quick status/info retrieval
    Lookup,
    /// Research and investigation
    Search,
    /// Writing prose: mails, docs, summaries
    Content,
    /// Editing existing files and configs
    FileMod,
    /// Writing or refactoring code
    Code,
    /// Diagnosing and fixing failures
    Debug,
    /// System design and planning
    Architecture,
    /// Releasing and shipping
    Deploy,
    /// Installation and environment setup
    Config,
}

impl Category {
    /// All categories in tie-break order.
    pub const ALL: [Self; 10] = [
        Self::Conversation,
        Self::Lookup,
        Self::Search,
        Self::Content,
        Self::FileMod,
        Self::Code,
        Self::Debug,
        Self::Architecture,
        Self::Deploy,
        Self::Config,
    ];
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Conversation => write!(formatter, "conversation"),
            Self::Lookup => write!(formatter, "lookup"),
            Self::Search => write!(formatter, "search"),
            Self::Content => write!(formatter, "content"),
            Self::FileMod => write!(formatter, "filemod"),
            Self::Code => write!(formatter, "code"),
            Self::Debug => write!(formatter, "debug"),
            Self::Architecture => write!(formatter, "architecture"),
            Self::Deploy => write!(formatter, "deploy"),
            Self::Config => write!(formatter, "config"),
        }
    }
}

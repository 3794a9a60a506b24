//! Task triage engine: classifies a short natural-language task
//! description and decides how to handle it: answer directly, delegate to
//! a worker tier with a time budget, or ask the requester to disambiguate.
//!
//! The pipeline is fully synchronous and pure: every stage is a function
//! of its input plus fixed vocabulary/weight tables. The only external
//! state is the cost-protection flag, consumed through the
//! [`ProtectionSource`] capability.

/// Task analysis strategies
pub mod analyzer;
/// Configuration loading and defaults
pub mod config;
/// Orchestration and report assembly
pub mod engine;
/// Error types
pub mod error;
/// Feature extraction from raw text
pub mod features;
/// Decision engine and protection policy
pub mod router;
/// Delegation command and label synthesis
pub mod spawn;
/// Text normalization
pub mod text;
/// Shared enums
pub mod types;
/// Closed bilingual vocabularies
pub mod vocab;

pub use analyzer::{
    Analysis, Analyzer, CategoryAnalyzer, StrategyKind, StructuralAnalyzer,
    category::CategoryClassification, structural::Classification,
};
pub use config::{ProtectionConfig, TriageConfig, WorkerConfig};
pub use engine::{AskChoice, Report, TriageEngine};
pub use error::{Result, TriageError};
pub use features::{FeatureSet, extract};
pub use router::{
    Decision, FileProtectionSource, NoProtection, ProtectionSource, apply_protection, decide,
};
pub use types::{Category, Complexity, CostTier, Recommendation, WorkerTier};

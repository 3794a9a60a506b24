//! Task analysis strategies.
//!
//! Two structurally incompatible classifiers ship behind the same seam: a
//! pure-structural analyzer and a keyword/category analyzer. They keep
//! their own thresholds and are selected by configuration, never merged.

/// Category/keyword strategy
pub mod category;
/// Pure-structural strategy
pub mod structural;

use crate::features::FeatureSet;
use crate::types::{Category, Complexity};
use serde::{Deserialize, Serialize};

pub use category::CategoryAnalyzer;
pub use structural::StructuralAnalyzer;

/// Which analysis strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Structural signals only, with an ambiguity detector
    #[default]
    Structural,
    /// Weighted bilingual keyword scoring into ten categories
    Category,
}

/// Common output of both strategies.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Estimated handling time in seconds
    pub estimated_seconds: u32,
    /// Ordinal complexity
    pub complexity: Complexity,
    /// Ambiguity verdict; `None` for strategies without an ambiguity signal
    pub ambiguous: Option<bool>,
    /// Dominant topical category; `None` for the structural strategy
    pub category: Option<Category>,
    /// Features the verdict was derived from, kept for diagnostics
    pub features: FeatureSet,
}

/// A task analysis strategy.
///
/// Implementations are pure functions of the input text plus their fixed
/// vocabulary/weight tables; concurrent calls share no state.
pub trait Analyzer: Send + Sync {
    /// Analyze one task string.
    fn analyze(&self, text: &str) -> Analysis;

    /// Strategy name for logs and reasoning strings.
    fn name(&self) -> &'static str;
}

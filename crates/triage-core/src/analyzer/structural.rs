//! Pure-structural classification: no keyword dictionaries beyond the
//! closed function-word vocabularies, no regex.

use super::{Analysis, Analyzer};
use crate::features::{self, FeatureSet};
use crate::types::Complexity;
use serde::Serialize;

/// Output of the structural strategy.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// Estimated handling time in seconds
    pub estimated_seconds: u32,
    /// Ordinal complexity
    pub complexity: Complexity,
    /// Short unscoped imperative with no concrete target signal
    pub ambiguous: bool,
}

/// Classifies complexity and duration purely from structural signals.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralAnalyzer;

impl StructuralAnalyzer {
    /// Create a structural analyzer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classify a feature set against its raw text.
    #[must_use]
    pub fn classify(features: &FeatureSet, text: &str) -> Classification {
        let complexity = Self::complexity(features);
        let estimated_seconds = Self::estimate(features);
        let ambiguous = Self::is_ambiguous(features, text, estimated_seconds);
        Classification {
            estimated_seconds,
            complexity,
            ambiguous,
        }
    }

    fn complexity(features: &FeatureSet) -> Complexity {
        let words = features.word_count;
        let mut complexity = Complexity::Simple;

        if words > 30 {
            complexity = complexity.max(Complexity::Complex);
        } else if words > 8 {
            complexity = complexity.max(Complexity::Normal);
        }

        let steps = features.total_steps();
        if steps >= 3 {
            complexity = complexity.max(Complexity::Complex);
        } else if steps >= 2 {
            complexity = complexity.max(Complexity::Normal);
        }

        if features.conditionals >= 2 {
            complexity = complexity.max(Complexity::Complex);
        } else if features.conditionals >= 1 {
            complexity = complexity.max(Complexity::Normal);
        }

        if features.technical_refs >= 2 {
            complexity = complexity.max(Complexity::Complex);
        } else if features.technical_refs >= 1 {
            complexity = complexity.max(Complexity::Normal);
        }

        // Questions cap complexity, they never raise it
        if features.question && words <= 10 {
            complexity = complexity.min(Complexity::Simple);
        } else if features.question && words <= 20 {
            complexity = complexity.min(Complexity::Normal);
        }

        if features.trivial || words <= 2 || (words <= 4 && !features.imperative) {
            complexity = Complexity::Simple;
        }

        complexity
    }

    /// Priority chain: the first matching rule picks the base estimate,
    /// then structural surcharges apply unconditionally.
    fn estimate(features: &FeatureSet) -> u32 {
        let words = features.word_count;
        let comm = features.communication;

        let base = if features.confirmation || features.trivial {
            5
        } else if words <= 2 && !features.imperative {
            5
        } else if words <= 2 {
            if comm { 10 } else { 50 }
        } else if words <= 4 && !features.imperative {
            10
        } else if words <= 4 {
            if comm { 15 } else { 50 }
        } else if features.question && words <= 10 {
            15
        } else if features.question && words <= 20 {
            30
        } else if features.question {
            45
        } else if words <= 8 {
            if comm { 20 } else { 35 }
        } else if words <= 15 {
            if comm { 30 } else { 60 }
        } else if comm {
            45
        } else {
            90
        };

        let mut estimated = base
            + features.connectors as u32 * 25
            + features.list_items as u32 * 20
            + features.conditionals as u32 * 15
            + u32::from(features.technical_refs) * 15;

        if words > 30 {
            estimated += 40;
        }

        // Short questions stay cheap no matter what the surcharges added
        if features.question && words <= 10 {
            estimated = estimated.min(20);
        }

        estimated
    }

    /// A short unscoped command with no evidence of a defined target: no
    /// quantifying digit, no file extension, no technical reference, a
    /// single step.
    fn is_ambiguous(features: &FeatureSet, text: &str, estimated_seconds: u32) -> bool {
        estimated_seconds >= 30
            && features.word_count < 5
            && features.imperative
            && !text.chars().any(|letter| letter.is_ascii_digit())
            && !text.contains('.')
            && features.technical_refs == 0
            && features.total_steps() <= 1
    }
}

impl Analyzer for StructuralAnalyzer {
    fn analyze(&self, text: &str) -> Analysis {
        let features = features::extract(text);
        let classification = Self::classify(&features, text);
        tracing::debug!(
            estimated = classification.estimated_seconds,
            complexity = %classification.complexity,
            ambiguous = classification.ambiguous,
            "structural classification"
        );
        Analysis {
            estimated_seconds: classification.estimated_seconds,
            complexity: classification.complexity,
            ambiguous: Some(classification.ambiguous),
            category: None,
            features,
        }
    }

    fn name(&self) -> &'static str {
        "structural"
    }
}

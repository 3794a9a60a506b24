//! Decision engine: maps an estimate and a complexity onto an execution
//! strategy and, for delegation, a worker tier with a time budget.

/// Cost-protection override policy
pub mod protection;

use crate::types::{Complexity, CostTier, Recommendation, WorkerTier};
use serde::Serialize;

pub use protection::{FileProtectionSource, NoProtection, ProtectionSource, apply_protection};

/// Estimates at or below this execute directly, whatever the strategy.
pub const DIRECT_THRESHOLD_SECONDS: u32 = 30;
/// Category-strategy band above which every task spawns.
pub const SPAWN_THRESHOLD_SECONDS: u32 = 120;
/// Timeout cap for heavy-tier workers.
pub const HEAVY_TIMEOUT_CAP_SECONDS: u32 = 1800;
/// Timeout cap for light-tier workers.
pub const LIGHT_TIMEOUT_CAP_SECONDS: u32 = 600;
/// Recommended worker timeout is a multiple of the estimate.
pub const TIMEOUT_MULTIPLIER: u32 = 3;

/// The two clarification choices offered when a task is too ambiguous to
/// route.
pub const ASK_USER_CHOICES: [(&str, &str); 2] = [
    ("light", "Standard task"),
    ("heavy", "Complex task (code/debug/architecture)"),
];

/// Routing decision for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// How to handle the task
    pub recommendation: Recommendation,
    /// Selected worker tier (`None` unless spawning)
    pub worker_tier: WorkerTier,
    /// Recommended timeout for the delegated worker, 0 when not spawning.
    /// This is advice for the downstream spawner, nothing here enforces it.
    pub timeout_seconds: u32,
    /// Relative processing cost
    pub cost_tier: CostTier,
    /// Estimate the decision was derived from
    pub estimated_seconds: u32,
    /// Complexity the decision was derived from
    pub complexity: Complexity,
    /// Set when the protection policy downgraded the tier
    pub protection_override: bool,
}

/// Apply the threshold matrix.
///
/// `ambiguous` carries the structural strategy's ambiguity verdict; pass
/// `None` for strategies without one, which selects the three-band rule
/// instead.
#[must_use]
pub fn decide(
    estimated_seconds: u32,
    complexity: Complexity,
    ambiguous: Option<bool>,
) -> Decision {
    let recommendation = match ambiguous {
        // Structural matrix: a hard 30s gate, with an ambiguity escape hatch
        Some(ambiguous_flag) => {
            if estimated_seconds <= DIRECT_THRESHOLD_SECONDS {
                Recommendation::ExecuteDirect
            } else if ambiguous_flag {
                Recommendation::AskUser
            } else {
                Recommendation::Spawn
            }
        }
        // Category matrix: a middle band where simple tasks stay direct
        None => {
            if estimated_seconds <= DIRECT_THRESHOLD_SECONDS {
                Recommendation::ExecuteDirect
            } else if estimated_seconds <= SPAWN_THRESHOLD_SECONDS {
                if complexity <= Complexity::Simple {
                    Recommendation::ExecuteDirect
                } else {
                    Recommendation::Spawn
                }
            } else {
                Recommendation::Spawn
            }
        }
    };

    let (worker_tier, timeout_seconds, cost_tier) = match recommendation {
        Recommendation::Spawn => {
            if complexity == Complexity::Complex {
                (
                    WorkerTier::Heavy,
                    (estimated_seconds * TIMEOUT_MULTIPLIER).min(HEAVY_TIMEOUT_CAP_SECONDS),
                    CostTier::High,
                )
            } else {
                (
                    WorkerTier::Light,
                    (estimated_seconds * TIMEOUT_MULTIPLIER).min(LIGHT_TIMEOUT_CAP_SECONDS),
                    CostTier::Medium,
                )
            }
        }
        Recommendation::ExecuteDirect | Recommendation::AskUser => {
            (WorkerTier::None, 0, CostTier::Low)
        }
    };

    Decision {
        recommendation,
        worker_tier,
        timeout_seconds,
        cost_tier,
        estimated_seconds,
        complexity,
        protection_override: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_below_threshold_both_strategies() {
        for ambiguous in [Some(false), Some(true), None] {
            let decision = decide(30, Complexity::Complex, ambiguous);
            assert_eq!(decision.recommendation, Recommendation::ExecuteDirect);
            assert_eq!(decision.worker_tier, WorkerTier::None);
            assert_eq!(decision.cost_tier, CostTier::Low);
        }
    }

    #[test]
    fn test_structural_spawns_above_threshold() {
        let decision = decide(31, Complexity::Simple, Some(false));
        assert_eq!(decision.recommendation, Recommendation::Spawn);
        assert_eq!(decision.worker_tier, WorkerTier::Light);
    }

    #[test]
    fn test_ambiguity_asks_instead_of_spawning() {
        let decision = decide(50, Complexity::Simple, Some(true));
        assert_eq!(decision.recommendation, Recommendation::AskUser);
        assert_eq!(decision.worker_tier, WorkerTier::None);
        assert_eq!(decision.timeout_seconds, 0);
    }

    #[test]
    fn test_category_middle_band_splits_on_complexity() {
        let simple = decide(60, Complexity::Simple, None);
        assert_eq!(simple.recommendation, Recommendation::ExecuteDirect);
        let normal = decide(60, Complexity::Normal, None);
        assert_eq!(normal.recommendation, Recommendation::Spawn);
        assert_eq!(normal.worker_tier, WorkerTier::Light);
    }

    #[test]
    fn test_category_upper_band_always_spawns() {
        let decision = decide(121, Complexity::Simple, None);
        assert_eq!(decision.recommendation, Recommendation::Spawn);
    }

    #[test]
    fn test_heavy_tier_and_timeouts() {
        let decision = decide(200, Complexity::Complex, Some(false));
        assert_eq!(decision.worker_tier, WorkerTier::Heavy);
        assert_eq!(decision.timeout_seconds, 600);
        assert_eq!(decision.cost_tier, CostTier::High);

        // Caps
        let decision = decide(1000, Complexity::Complex, Some(false));
        assert_eq!(decision.timeout_seconds, 1800);
        let decision = decide(1000, Complexity::Normal, Some(false));
        assert_eq!(decision.timeout_seconds, 600);
    }

    #[test]
    fn test_decide_is_monotone_in_estimate() {
        // Direct never occurs above the gate, spawn never at or below it
        for estimate in 0..=300 {
            let decision = decide(estimate, Complexity::Normal, Some(false));
            if estimate <= 30 {
                assert_eq!(decision.recommendation, Recommendation::ExecuteDirect);
            } else {
                assert_eq!(decision.recommendation, Recommendation::Spawn);
            }
        }
    }
}

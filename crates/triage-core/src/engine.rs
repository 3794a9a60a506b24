//! High-level engine that wires extraction, analysis, decision, protection,
//! and synthesis into a single call.

use crate::analyzer::{Analyzer, CategoryAnalyzer, StrategyKind, StructuralAnalyzer};
use crate::config::TriageConfig;
use crate::features::FeatureSet;
use crate::router::{
    ASK_USER_CHOICES, FileProtectionSource, NoProtection, ProtectionSource, apply_protection,
    decide,
};
use crate::spawn;
use crate::types::{Category, Complexity, CostTier, Recommendation, WorkerTier};
use serde::Serialize;

/// One clarification choice offered for an ambiguous task.
#[derive(Debug, Clone, Serialize)]
pub struct AskChoice {
    /// Worker tier the choice maps to
    pub tier: String,
    /// Human-readable description
    pub description: String,
}

/// Full diagnostic output for one triaged task.
///
/// This is the data contract for the rendering layer: everything a JSON or
/// text report needs is here, and nothing here performs the rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Original task text
    pub task: String,
    /// How to handle the task
    pub recommendation: Recommendation,
    /// Selected worker tier
    pub worker_tier: WorkerTier,
    /// Worker identifier for the selected tier, when spawning
    pub worker: Option<String>,
    /// One-line explanation of the verdict
    pub reasoning: String,
    /// Delegation invocation string, when spawning
    pub command: Option<String>,
    /// Recommended worker timeout (advisory, 0 when not spawning)
    pub timeout_seconds: u32,
    /// Estimated handling time
    pub estimated_seconds: u32,
    /// Relative processing cost
    pub cost: CostTier,
    /// Ordinal complexity
    pub complexity: Complexity,
    /// Dominant category (category strategy only)
    pub category: Option<Category>,
    /// Ambiguity verdict (structural strategy only)
    pub ambiguous: Option<bool>,
    /// Whether cost protection was active during the decision
    pub protection_mode: bool,
    /// Whether protection downgraded the worker tier
    pub protection_override: bool,
    /// Short slug derived from the task text
    pub label: String,
    /// Clarification choices, present only for `ask_user`
    pub options: Option<Vec<AskChoice>>,
    /// Extracted features, for diagnostics
    pub features: FeatureSet,
}

/// Ties the analysis strategies, decision matrix, protection policy, and
/// synthesizer together.
pub struct TriageEngine {
    config: TriageConfig,
    analyzer: Box<dyn Analyzer>,
    protection: Box<dyn ProtectionSource>,
}

impl TriageEngine {
    /// Create an engine from configuration.
    ///
    /// The analyzer follows `config.strategy`; the protection flag is read
    /// from the configured state file (or, failing even path resolution,
    /// never activates).
    #[must_use]
    pub fn new(config: TriageConfig) -> Self {
        let analyzer: Box<dyn Analyzer> = match config.strategy {
            StrategyKind::Structural => Box::new(StructuralAnalyzer::new()),
            StrategyKind::Category => Box::new(CategoryAnalyzer::new()),
        };
        let protection: Box<dyn ProtectionSource> = match config.protection.resolved_state_file() {
            Ok(path) => Box::new(FileProtectionSource::new(path)),
            Err(_) => Box::new(NoProtection),
        };
        Self {
            config,
            analyzer,
            protection,
        }
    }

    /// Sets a custom analyzer.
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: Box<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Sets a custom protection source.
    #[must_use]
    pub fn with_protection(mut self, protection: Box<dyn ProtectionSource>) -> Self {
        self.protection = protection;
        self
    }

    /// Current protection flag, read once per call.
    #[must_use]
    pub fn protection_active(&self) -> bool {
        self.protection.protection_active()
    }

    /// Triage one task string.
    #[must_use]
    pub fn triage(&self, task: &str) -> Report {
        let analysis = self.analyzer.analyze(task);
        let decision = decide(analysis.estimated_seconds, analysis.complexity, analysis.ambiguous);

        let protection_mode = self.protection.protection_active();
        let decision = apply_protection(decision, protection_mode);

        let worker = self
            .config
            .worker_for(decision.worker_tier)
            .map(ToOwned::to_owned);
        let label = spawn::label(task);

        let command = worker.as_ref().map(|worker_id| {
            if self.config.notify {
                spawn::notify_command(task, worker_id, &label, decision.timeout_seconds)
            } else {
                spawn::spawn_command(task, worker_id, &label)
            }
        });

        let options = (decision.recommendation == Recommendation::AskUser).then(|| {
            ASK_USER_CHOICES
                .iter()
                .map(|(tier, description)| AskChoice {
                    tier: (*tier).to_owned(),
                    description: (*description).to_owned(),
                })
                .collect()
        });

        let reasoning = Self::reasoning(&analysis, &decision, worker.as_deref());

        tracing::info!(
            strategy = self.analyzer.name(),
            recommendation = %decision.recommendation,
            estimated = decision.estimated_seconds,
            tier = %decision.worker_tier,
            "task triaged"
        );

        Report {
            task: task.to_owned(),
            recommendation: decision.recommendation,
            worker_tier: decision.worker_tier,
            worker,
            reasoning,
            command,
            timeout_seconds: decision.timeout_seconds,
            estimated_seconds: decision.estimated_seconds,
            cost: decision.cost_tier,
            complexity: decision.complexity,
            category: analysis.category,
            ambiguous: analysis.ambiguous,
            protection_mode,
            protection_override: decision.protection_override,
            label,
            options,
            features: analysis.features,
        }
    }

    fn reasoning(
        analysis: &crate::analyzer::Analysis,
        decision: &crate::router::Decision,
        worker: Option<&str>,
    ) -> String {
        let mut reasoning = match analysis.category {
            Some(category) => format!(
                "category={category} time={}s complexity={} -> {}",
                decision.estimated_seconds, decision.complexity, decision.recommendation
            ),
            None => format!(
                "words={} steps={} question={} imperative={} communication={} confirmation={} tech_refs={} -> time={}s complexity={} -> {}",
                analysis.features.word_count,
                analysis.features.total_steps(),
                analysis.features.question,
                analysis.features.imperative,
                analysis.features.communication,
                analysis.features.confirmation,
                analysis.features.technical_refs,
                decision.estimated_seconds,
                decision.complexity,
                decision.recommendation
            ),
        };
        if let Some(worker_id) = worker {
            reasoning.push_str(&format!(" ({worker_id})"));
        }
        if decision.protection_override {
            reasoning.push_str(" [protection: heavy->light]");
        }
        reasoning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analysis;
    use crate::features;

    /// Fixed-flag protection source for tests.
    struct StaticProtection(bool);

    impl ProtectionSource for StaticProtection {
        fn protection_active(&self) -> bool {
            self.0
        }
    }

    fn engine() -> TriageEngine {
        TriageEngine::new(TriageConfig::default()).with_protection(Box::new(NoProtection))
    }

    #[test]
    fn test_trivial_message_executes_directly() {
        let report = engine().triage("ok");
        assert_eq!(report.recommendation, Recommendation::ExecuteDirect);
        assert_eq!(report.estimated_seconds, 5);
        assert_eq!(report.complexity, Complexity::Simple);
        assert!(report.command.is_none());
        assert!(report.worker.is_none());
    }

    #[test]
    fn test_short_unscoped_imperative_asks_user() {
        let report = engine().triage("Fix it");
        assert_eq!(report.recommendation, Recommendation::AskUser);
        assert_eq!(report.ambiguous, Some(true));
        assert_eq!(report.worker_tier, WorkerTier::None);
        let options = report.options.unwrap();
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_complex_pipeline_spawns_heavy() {
        let report = engine().triage(
            "Build the payment API in `src/api.rs`, add tests for https://pay.example.com/api, then deploy it if CI passes.",
        );
        assert_eq!(report.recommendation, Recommendation::Spawn);
        assert_eq!(report.worker_tier, WorkerTier::Heavy);
        assert_eq!(report.cost, CostTier::High);
        let command = report.command.unwrap();
        assert!(command.contains(&report.label));
    }

    #[test]
    fn test_protection_downgrades_heavy_spawn() {
        let engine = TriageEngine::new(TriageConfig::default())
            .with_protection(Box::new(StaticProtection(true)));
        let report = engine.triage(
            "Build the payment API in `src/api.rs`, add tests for https://pay.example.com/api, then deploy it if CI passes.",
        );
        assert_eq!(report.worker_tier, WorkerTier::Light);
        assert_eq!(report.cost, CostTier::Medium);
        assert!(report.timeout_seconds <= 600);
        assert!(report.protection_override);
        assert!(report.protection_mode);
        assert_eq!(report.worker, Some(TriageConfig::default().workers.light));
    }

    #[test]
    fn test_category_strategy_reports_category() {
        let config = TriageConfig {
            strategy: StrategyKind::Category,
            ..TriageConfig::default()
        };
        let engine = TriageEngine::new(config).with_protection(Box::new(NoProtection));
        let report = engine.triage("Fix the login bug");
        assert_eq!(report.category, Some(Category::Debug));
        assert!(report.ambiguous.is_none());
        assert_eq!(report.recommendation, Recommendation::Spawn);
        assert_eq!(report.worker_tier, WorkerTier::Heavy);
    }

    #[test]
    fn test_notify_path_embeds_timeout() {
        let config = TriageConfig {
            notify: true,
            ..TriageConfig::default()
        };
        let engine = TriageEngine::new(config).with_protection(Box::new(NoProtection));
        let report = engine.triage(
            "Migrate every service to the new config format and update deployment scripts accordingly for all environments",
        );
        assert_eq!(report.recommendation, Recommendation::Spawn);
        let command = report.command.unwrap();
        assert!(command.starts_with("spawn-notify.sh"));
        assert!(command.contains(&format!("--timeout {}", report.timeout_seconds)));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = engine().triage("Show me the status");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["recommendation"], "execute_direct");
        assert_eq!(json["estimated_seconds"], 15);
        assert_eq!(json["features"]["communication"], true);
    }

    #[test]
    fn test_custom_analyzer_injection() {
        /// Analyzer double with a fixed verdict.
        struct Fixed;

        impl Analyzer for Fixed {
            fn analyze(&self, text: &str) -> Analysis {
                Analysis {
                    estimated_seconds: 999,
                    complexity: Complexity::Complex,
                    ambiguous: Some(false),
                    category: None,
                    features: features::extract(text),
                }
            }

            fn name(&self) -> &'static str {
                "fixed"
            }
        }

        let engine = engine().with_analyzer(Box::new(Fixed));
        let report = engine.triage("anything");
        assert_eq!(report.estimated_seconds, 999);
        assert_eq!(report.worker_tier, WorkerTier::Heavy);
        assert_eq!(report.timeout_seconds, 1800);
    }
}

//! Keyword/category classification: weighted bilingual pattern scoring
//! into ten topical categories, then a category-specific duration model.

use super::{Analysis, Analyzer};
use crate::features::{self, FeatureSet};
use crate::types::{Category, Complexity};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Output of the category strategy.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryClassification {
    /// Dominant topical category
    pub category: Category,
    /// Estimated handling time in seconds
    pub estimated_seconds: u32,
    /// Ordinal complexity
    pub complexity: Complexity,
}

fn pattern(source: &str) -> Regex {
    match Regex::new(source) {
        Ok(regex) => regex,
        Err(error) => panic!("built-in pattern is invalid: {error}"),
    }
}

/// Precompiled bilingual keyword groups, matched against lower-cased text.
struct Patterns {
    conv_greeting: Regex,
    conv_question: Regex,
    conv_opinion: Regex,
    lookup_verb: Regex,
    lookup_tool: Regex,
    lookup_read: Regex,
    search_verb: Regex,
    search_deep: Regex,
    search_quant: Regex,
    content_verb: Regex,
    content_obj: Regex,
    filemod_verb: Regex,
    filemod_obj: Regex,
    code_keyword: Regex,
    code_create: Regex,
    code_infra: Regex,
    code_test: Regex,
    code_refactor: Regex,
    debug_fix: Regex,
    debug_verb: Regex,
    debug_signal: Regex,
    debug_tech: Regex,
    arch_keyword: Regex,
    arch_system: Regex,
    arch_multi: Regex,
    deploy_keyword: Regex,
    deploy_action: Regex,
    config_keyword: Regex,
    config_tech: Regex,
    tech_object: Regex,
    multi_step: Regex,
    multi_batch: Regex,
    commit_end: Regex,
    question_start: Regex,
    question_early: Regex,
}

impl Patterns {
    #[allow(clippy::too_many_lines, reason = "One field per keyword group")]
    fn new() -> Self {
        Self {
            conv_greeting: pattern(
                r"^(ok|oui|non|yes|no|merci|thanks|super|cool|bien|parfait|good|great|salut|hello|hi|bonjour|bonsoir|hey|yo|ciao|d.accord|okay|vas-y|go|fais-le|lance|c.est bon|top|nice|lol|mdr|haha|👍|❤️|🙏)$",
            ),
            conv_question: pattern(
                r"^\s*(quel |quelle |comment |pourquoi |combien |où |quand |est-ce que |what |how |why |when |where |which |who |is |are |can |do |does )",
            ),
            conv_opinion: pattern(
                r"\b(penses|think|opinion|avis|recommend|conseille|préfère|prefer|choix|choice)\b",
            ),
            lookup_verb: pattern(
                r"\b(check|vérifie|show|affiche|list|liste|status|état|info|get|récupère|dis-moi|tell me|regarde|look|montre)\b",
            ),
            lookup_tool: pattern(
                r"\b(calendar|calendrier|agenda|weather|météo|meteo|heure|time|date|aujourd.hui|today|demain|tomorrow|rappelle|remind)\b",
            ),
            lookup_read: pattern(r"\b(read|lis|log|logs|git status|git log|git diff)\b"),
            search_verb: pattern(
                r"\b(recherche|cherche|search|find|trouve|trouver|articles?|papers?|sources?|références?)\b",
            ),
            search_deep: pattern(
                r"\b(investigate|explore|analyze|analyse|compare|audit|review|evaluate|évalue|benchmark|état de l.art|state of the art)\b",
            ),
            search_quant: pattern(
                r"\b[0-9]+\s*(articles?|exemples?|sources?|liens?|links?|results?|résultats?|options?|alternatives?)\b",
            ),
            content_verb: pattern(
                r"\b(rédige|draft|compose|write|écris|résume|summarize|summary|résumé|traduis|translate)\b",
            ),
            content_obj: pattern(
                r"\b(email|mail|message|lettre|letter|article|blog|post|doc|documentation|readme|rapport|report)\b",
            ),
            filemod_verb: pattern(
                r"\b(update|met à jour|modifie|modify|change|edit|édite|améliore|improve|réécris|rewrite|ajoute|add|supprime|remove|delete|rename|renomme)\b",
            ),
            filemod_obj: pattern(
                r"\b(fichier|file|config|\.json|\.yaml|\.yml|\.toml|\.env|\.md|\.txt)\b",
            ),
            code_keyword: pattern(
                r"\b(code|script|function|fonction|implement|implémente|développe|develop|programme|program|endpoint|api|route|handler|middleware|class|module|package|library|lib)\b",
            ),
            code_create: pattern(r"\b(crée|créer|create|build|write a|écris un)\b"),
            code_infra: pattern(
                r"\b(skill|plugin|tool|bot|cli|daemon|service|worker|cron|webhook|docker|container|k8s|kubernetes)\b",
            ),
            code_test: pattern(
                r"\b(test|tests|spec|unittest|jest|pytest|ci|cd|pipeline|lint|eslint|prettier|type.?check|e2e|integration.?test|coverage)\b",
            ),
            code_refactor: pattern(
                r"\b(refactor[ei]?|refactorise|optimize|optimise|clean.?up|restructure)\b",
            ),
            debug_fix: pattern(r"\b(fix|corrige|résous|resolve|troubleshoot|répare)\b"),
            debug_verb: pattern(r"\b(debug|debugge|diagnose|diagnostique)\b"),
            debug_signal: pattern(
                r"\b(error|erreur|bug|issue|broken|cassé|crash|fail|failed|marche pas|doesn.t work|not working|problem|problème|weird|bizarre|strange|étrange)\b",
            ),
            debug_tech: pattern(
                r"\b(stack.?trace|traceback|exception|segfault|undefined|null|nan|timeout|502|500|404|403|401)\b",
            ),
            arch_keyword: pattern(
                r"\b(architect|architecture|design|conception|plan|planifie|stratégie|strategy|roadmap|spec|specification)\b",
            ),
            arch_system: pattern(
                r"\b(système|system|infrastructure|infra|stack|database|db|schema|migration|migrate|scale|scaling)\b",
            ),
            arch_multi: pattern(
                r"\b(multi|plusieurs composants|several components|microservice|monorepo|event.?driven|pub.?sub|queue|message broker)\b",
            ),
            deploy_keyword: pattern(
                r"\b(deploy|déploie|publish|publie|release|ship|merge|pr |pull request|push to|vercel|netlify|heroku|aws|gcp|azure)\b",
            ),
            deploy_action: pattern(
                r"\b(assure.?toi|assure.?toi que|ensure|make sure|vérifie que|check that|synchronise|sync|met à jour|update)\b",
            ),
            config_keyword: pattern(
                r"\b(install|installe|configure|setup|set up|config|provision|bootstrap|init|initialize)\b",
            ),
            config_tech: pattern(
                r"\b(ssh|ssl|tls|cert|certificate|dns|domain|nginx|apache|proxy|firewall|port|env|environment)\b",
            ),
            tech_object: pattern(
                r"\b(repo|repository|github|gitlab|bitbucket|git |npm|yarn|pnpm|docker|container|image|service|daemon|server|api|endpoint|database|db|version|package|module|lib|library|branch|main|master|prod|production|staging|dev)\b",
            ),
            multi_step: pattern(
                r"\b(and then|et ensuite|puis|après ça|ensuite|step.?by.?step|étape par étape)\b",
            ),
            multi_batch: pattern(
                r"\b(multiple|plusieurs|every|chaque|all|tous|toutes|each|batch|bulk)\b",
            ),
            commit_end: pattern(
                r"\b(commit|push|test|tests)\s*[,.]?\s*$|\bcommit.*(push|et push)",
            ),
            question_start: pattern(
                r"^\s*(c.est quoi|qu.est-ce que|what is|what.s|why does|why is|pourquoi|how does|how is|comment ça|explique|explain|describe|décris)",
            ),
            question_early: pattern(
                r"^\s*(c.est quoi|qu.est-ce que|what is|what.s|why does|pourquoi|how |comment |explique|explain|describe|décris)",
            ),
        }
    }
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);

/// Per-category score accumulators.
#[derive(Debug, Default, Clone, Copy)]
struct ScoreBoard {
    scores: [i32; 10],
}

impl ScoreBoard {
    fn index(category: Category) -> usize {
        Category::ALL
            .iter()
            .position(|candidate| *candidate == category)
            .unwrap_or(0)
    }

    fn add(&mut self, category: Category, weight: i32) {
        self.scores[Self::index(category)] += weight;
    }

    fn get(&self, category: Category) -> i32 {
        self.scores[Self::index(category)]
    }

    fn set(&mut self, category: Category, score: i32) {
        self.scores[Self::index(category)] = score;
    }

    /// Dominant category; ties resolve to the first in enumeration order.
    fn dominant(&self) -> (Category, i32) {
        let mut best = Category::ALL[0];
        let mut best_score = self.scores[0];
        for (category, score) in Category::ALL.iter().zip(self.scores.iter()).skip(1) {
            if *score > best_score {
                best = *category;
                best_score = *score;
            }
        }
        (best, best_score)
    }
}

/// Classifies tasks into topical categories via weighted keyword matching.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryAnalyzer;

impl CategoryAnalyzer {
    /// Create a category analyzer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classify one task string.
    #[must_use]
    pub fn classify(text: &str) -> CategoryClassification {
        Self::classify_features(&features::extract(text), text)
    }

    /// Classify against already-extracted features (word/comma counts).
    #[must_use]
    pub fn classify_features(features: &FeatureSet, text: &str) -> CategoryClassification {
        let lower = text.trim().to_lowercase();
        let words = features.word_count;
        let patterns = &*PATTERNS;

        let board = Self::score(patterns, &lower);
        let dominant = Self::pick_dominant(patterns, &board, &lower, words);
        let (mut estimated, mut complexity) = Self::base_for(dominant);

        Self::dampen_questions(patterns, &lower, words, dominant, &mut estimated, &mut complexity);
        Self::apply_scope_surcharges(
            patterns,
            &lower,
            features,
            dominant,
            &mut estimated,
            &mut complexity,
        );
        Self::apply_combinations(patterns, &board, &lower, &mut estimated, &mut complexity);

        CategoryClassification {
            category: dominant,
            estimated_seconds: estimated,
            complexity,
        }
    }

    #[allow(clippy::too_many_lines, reason = "One block per category, data-driven weights")]
    fn score(patterns: &Patterns, lower: &str) -> ScoreBoard {
        let mut board = ScoreBoard::default();

        if patterns.conv_greeting.is_match(lower) {
            board.add(Category::Conversation, 10);
        }
        if patterns.conv_question.is_match(lower) {
            board.add(Category::Conversation, 5);
        }
        if lower.trim_end().ends_with('?') {
            board.add(Category::Conversation, 3);
        }
        if patterns.conv_opinion.is_match(lower) {
            board.add(Category::Conversation, 4);
        }

        if patterns.lookup_verb.is_match(lower) {
            board.add(Category::Lookup, 5);
        }
        if patterns.lookup_tool.is_match(lower) {
            board.add(Category::Lookup, 6);
        }
        if patterns.lookup_read.is_match(lower) {
            board.add(Category::Lookup, 4);
        }

        if patterns.search_verb.is_match(lower) {
            board.add(Category::Search, 5);
        }
        if patterns.search_deep.is_match(lower) {
            board.add(Category::Search, 5);
        }
        if patterns.search_quant.is_match(lower) {
            board.add(Category::Search, 4);
        }

        if patterns.content_verb.is_match(lower) {
            board.add(Category::Content, 5);
        }
        if patterns.content_obj.is_match(lower) {
            board.add(Category::Content, 4);
        }

        if patterns.filemod_verb.is_match(lower) {
            board.add(Category::FileMod, 5);
        }
        if patterns.filemod_obj.is_match(lower) {
            board.add(Category::FileMod, 3);
        }

        if patterns.code_keyword.is_match(lower) {
            board.add(Category::Code, 6);
        }
        if patterns.code_create.is_match(lower) {
            // Bare creation verbs split credit until code context shows up
            if board.get(Category::Code) > 0 {
                board.add(Category::Code, 4);
            } else {
                board.add(Category::Content, 2);
                board.add(Category::Code, 2);
            }
        }
        if patterns.code_infra.is_match(lower) {
            board.add(Category::Code, 5);
        }
        if patterns.code_test.is_match(lower) {
            board.add(Category::Code, 6);
        }
        if patterns.code_refactor.is_match(lower) {
            board.add(Category::Code, 7);
        }

        if patterns.debug_fix.is_match(lower) {
            board.add(Category::Debug, 8);
        }
        if patterns.debug_verb.is_match(lower) {
            board.add(Category::Debug, 6);
        }
        if patterns.debug_signal.is_match(lower) {
            board.add(Category::Debug, 5);
        }
        if patterns.debug_tech.is_match(lower) {
            board.add(Category::Debug, 4);
        }

        if patterns.arch_keyword.is_match(lower) {
            board.add(Category::Architecture, 7);
        }
        if patterns.arch_system.is_match(lower) {
            board.add(Category::Architecture, 4);
        }
        if patterns.arch_multi.is_match(lower) {
            board.add(Category::Architecture, 5);
        }

        if patterns.deploy_keyword.is_match(lower) {
            board.add(Category::Deploy, 6);
        }
        if patterns.deploy_action.is_match(lower) {
            board.add(Category::Deploy, 2);
            board.add(Category::Config, 2);
        }

        if patterns.config_keyword.is_match(lower) {
            board.add(Category::Config, 5);
        }
        if patterns.config_tech.is_match(lower) {
            board.add(Category::Config, 4);
        }

        // A technical object only reinforces deploy/config intent that is
        // already there
        if patterns.tech_object.is_match(lower)
            && (board.get(Category::Deploy) >= 2 || board.get(Category::Config) >= 2)
        {
            board.add(Category::Deploy, 6);
            board.add(Category::Config, 4);
        }

        // Strong code intent absorbs incidental file-edit phrasing
        let code = board.get(Category::Code);
        let filemod = board.get(Category::FileMod);
        if code >= 10 && filemod > 0 && filemod < code {
            board.set(Category::FileMod, filemod / 2);
        }
        if code >= 6 && board.get(Category::Debug) >= 5 {
            board.add(Category::Architecture, 3);
        }

        board
    }

    fn pick_dominant(
        patterns: &Patterns,
        board: &ScoreBoard,
        lower: &str,
        words: usize,
    ) -> Category {
        let (mut dominant, max_score) = board.dominant();
        if max_score <= 2 {
            dominant = Category::Conversation;
        }

        // Short questions with a thin score gap read as conversation
        let question_early =
            lower.trim_end().ends_with('?') || patterns.question_early.is_match(lower);
        if dominant != Category::Conversation
            && question_early
            && words <= 6
            && max_score - board.get(Category::Conversation) <= 3
        {
            dominant = Category::Conversation;
        }

        dominant
    }

    fn base_for(category: Category) -> (u32, Complexity) {
        match category {
            Category::Conversation => (10, Complexity::Simple),
            Category::Lookup => (12, Complexity::Simple),
            Category::Search => (45, Complexity::Normal),
            Category::Content => (50, Complexity::Normal),
            Category::FileMod => (40, Complexity::Normal),
            Category::Code => (80, Complexity::Complex),
            Category::Debug => (90, Complexity::Complex),
            Category::Architecture => (120, Complexity::Complex),
            Category::Deploy => (60, Complexity::Normal),
            Category::Config => (50, Complexity::Normal),
        }
    }

    /// Questions about heavy categories are usually explanation requests,
    /// not requests to do the work.
    fn dampen_questions(
        patterns: &Patterns,
        lower: &str,
        words: usize,
        category: Category,
        estimated: &mut u32,
        complexity: &mut Complexity,
    ) {
        let question =
            lower.trim_end().ends_with('?') || patterns.question_start.is_match(lower);

        if question
            && words <= 8
            && matches!(category, Category::Debug | Category::Code | Category::Architecture)
        {
            if words <= 5 {
                *estimated = 15;
                *complexity = Complexity::Simple;
            } else {
                *estimated = 25;
                *complexity = Complexity::Normal;
            }
        }

        if question
            && words <= 12
            && patterns.question_start.is_match(lower)
            && *complexity == Complexity::Complex
        {
            *complexity = Complexity::Normal;
            *estimated = (*estimated).min(40);
        }
    }

    fn apply_scope_surcharges(
        patterns: &Patterns,
        lower: &str,
        features: &FeatureSet,
        category: Category,
        estimated: &mut u32,
        complexity: &mut Complexity,
    ) {
        if patterns.multi_step.is_match(lower) {
            *estimated += 30;
        }
        if patterns.multi_batch.is_match(lower) {
            *estimated += 20;
        }
        if features.commas >= 2 {
            *estimated += features.commas as u32 * 10;
        }

        let words = features.word_count;
        if words > 30 {
            *estimated += 40;
            if *complexity >= Complexity::Normal {
                *complexity = Complexity::Complex;
            }
        } else if words > 15 {
            *estimated += 20;
        } else if words <= 4 && category == Category::Conversation {
            *estimated = (*estimated).min(10);
        }
    }

    fn apply_combinations(
        patterns: &Patterns,
        board: &ScoreBoard,
        lower: &str,
        estimated: &mut u32,
        complexity: &mut Complexity,
    ) {
        if board.get(Category::Code) >= 3 && board.get(Category::Debug) >= 3 {
            *estimated += 30;
            *complexity = Complexity::Complex;
        }
        if board.get(Category::Architecture) >= 3 && board.get(Category::Code) >= 3 {
            *estimated += 40;
            *complexity = Complexity::Complex;
        }
        if patterns.commit_end.is_match(lower) {
            *estimated += 15;
        }
    }
}

impl Analyzer for CategoryAnalyzer {
    fn analyze(&self, text: &str) -> Analysis {
        let features = features::extract(text);
        let classification = Self::classify_features(&features, text);
        tracing::debug!(
            category = %classification.category,
            estimated = classification.estimated_seconds,
            complexity = %classification.complexity,
            "category classification"
        );
        Analysis {
            estimated_seconds: classification.estimated_seconds,
            complexity: classification.complexity,
            ambiguous: None,
            category: Some(classification.category),
            features,
        }
    }

    fn name(&self) -> &'static str {
        "category"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_is_conversation() {
        let verdict = CategoryAnalyzer::classify("salut");
        assert_eq!(verdict.category, Category::Conversation);
        assert_eq!(verdict.estimated_seconds, 10);
        assert_eq!(verdict.complexity, Complexity::Simple);
    }

    #[test]
    fn test_unmatched_text_falls_back_to_conversation() {
        let verdict = CategoryAnalyzer::classify("hmm d'accord alors");
        assert_eq!(verdict.category, Category::Conversation);
    }

    #[test]
    fn test_fix_is_debug() {
        let verdict = CategoryAnalyzer::classify("Fix the login bug");
        assert_eq!(verdict.category, Category::Debug);
        assert_eq!(verdict.estimated_seconds, 90);
        assert_eq!(verdict.complexity, Complexity::Complex);
    }

    #[test]
    fn test_lookup() {
        let verdict = CategoryAnalyzer::classify("check the calendar for tomorrow");
        assert_eq!(verdict.category, Category::Lookup);
        assert_eq!(verdict.complexity, Complexity::Simple);
    }

    #[test]
    fn test_creation_verb_with_code_context() {
        let verdict = CategoryAnalyzer::classify("create a python script for backups");
        assert_eq!(verdict.category, Category::Code);
    }

    #[test]
    fn test_creation_verb_without_context_scores_too_low() {
        // Split credit leaves every score at 2, which floors to conversation
        let verdict = CategoryAnalyzer::classify("create something nice");
        assert_eq!(verdict.category, Category::Conversation);
    }

    #[test]
    fn test_short_question_tie_breaks_to_conversation() {
        let verdict = CategoryAnalyzer::classify("is the api up?");
        assert_eq!(verdict.category, Category::Conversation);
    }

    #[test]
    fn test_question_dampening_on_debug() {
        let verdict = CategoryAnalyzer::classify("how do I fix this broken thing?");
        assert_eq!(verdict.category, Category::Debug);
        assert_eq!(verdict.estimated_seconds, 25);
        assert_eq!(verdict.complexity, Complexity::Normal);
    }

    #[test]
    fn test_explanation_question_capped() {
        let verdict =
            CategoryAnalyzer::classify("explain how the deployment architecture works in this repo");
        assert_eq!(verdict.category, Category::Architecture);
        assert_eq!(verdict.complexity, Complexity::Normal);
        assert!(verdict.estimated_seconds <= 40);
    }

    #[test]
    fn test_code_and_debug_combination_forces_complex() {
        let verdict =
            CategoryAnalyzer::classify("fix the auth bug, add a regression test, then push to prod");
        assert_eq!(verdict.complexity, Complexity::Complex);
        // base 90 + commas + combination boost
        assert!(verdict.estimated_seconds >= 140);
    }

    #[test]
    fn test_trailing_commit_surcharge() {
        let with = CategoryAnalyzer::classify("update the readme and commit");
        let without = CategoryAnalyzer::classify("update the readme and relax");
        assert_eq!(with.category, Category::FileMod);
        assert_eq!(with.estimated_seconds, without.estimated_seconds + 15);
    }

    #[test]
    fn test_tech_object_boosts_existing_deploy_intent() {
        let verdict = CategoryAnalyzer::classify("deploy the service to production");
        assert_eq!(verdict.category, Category::Deploy);
        assert_eq!(verdict.complexity, Complexity::Normal);
    }

    #[test]
    fn test_long_task_widens_estimate() {
        let verdict = CategoryAnalyzer::classify(
            "rewrite the ingestion module so that every batch is validated against the schema, \
             log all rejected rows to a separate file, migrate the database, update the docs, \
             and make sure the dashboards still render",
        );
        assert_eq!(verdict.complexity, Complexity::Complex);
        assert!(verdict.estimated_seconds > 120);
    }

    #[test]
    fn test_config_category() {
        let verdict = CategoryAnalyzer::classify("install and configure nginx with ssl certs");
        assert_eq!(verdict.category, Category::Config);
    }

    #[test]
    fn test_empty_input() {
        let verdict = CategoryAnalyzer::classify("");
        assert_eq!(verdict.category, Category::Conversation);
        assert_eq!(verdict.complexity, Complexity::Simple);
    }
}

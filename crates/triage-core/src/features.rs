//! Structural and lexical feature extraction from raw task text.
//!
//! [`extract`] is a total pure function: empty strings, pure punctuation,
//! and non-ASCII input all produce a valid (if degenerate) feature set.

use crate::text::{EDGE_PUNCTUATION, count_char, normalize_text, normalize_word};
use crate::vocab;
use serde::Serialize;

/// Flat bag of signals derived from one task string.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSet {
    /// Whitespace-separated word count
    pub word_count: usize,
    /// Terminal punctuation count (`.`, `!`, `;`), floored at 1
    pub sentence_count: usize,
    /// Numbered (`1.`/`1)`/`1:`) or bulleted (`- `/`• `) line prefixes
    pub list_items: usize,
    /// Sequencing words and word pairs ("then", "puis", "and then", ...)
    pub connectors: usize,
    /// Conditional/exception markers ("if", "sauf", "unless", ...)
    pub conditionals: usize,
    /// Technical-reference score, at most one point per signal type (0-4)
    pub technical_refs: u8,
    /// Comma count
    pub commas: usize,
    /// First word, lower-cased, accent-folded, edge punctuation stripped
    pub first_word: String,
    /// Ends in `?` or opens with an interrogative
    pub question: bool,
    /// Command starting with a plausible verb
    pub imperative: bool,
    /// Greeting/acknowledgement/emoji-only message
    pub trivial: bool,
    /// Imperative whose verb asks for information rather than work
    pub communication: bool,
    /// Short confirmation/correction riding on a yes/no opener
    pub confirmation: bool,
}

impl FeatureSet {
    /// Total step estimate: one base step plus connectors and list items,
    /// incremented once more for heavy comma use and again for three or
    /// more sentences.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        let mut steps = 1 + self.connectors + self.list_items;
        if self.commas >= 3 {
            steps += 1;
        }
        if self.sentence_count >= 3 {
            steps += 1;
        }
        steps
    }
}

/// Extract all structural and lexical features from a task string.
#[must_use]
pub fn extract(text: &str) -> FeatureSet {
    let text = text.trim();
    let normalized = normalize_text(text);
    let words: Vec<&str> = text.split_whitespace().collect();
    let normalized_words: Vec<&str> = normalized.split_whitespace().collect();
    let word_count = words.len();

    let first_word = words.first().map(|word| normalize_word(word)).unwrap_or_default();

    let question = is_question(text, &first_word);
    let trivial = is_trivial(&normalized_words, word_count);
    let imperative = is_imperative(&first_word, question, word_count);
    let communication = imperative && is_communication(&first_word, &normalized);
    let confirmation = is_confirmation(&normalized_words, word_count, &first_word);

    FeatureSet {
        word_count,
        sentence_count: count_sentences(text),
        list_items: count_list_items(text),
        connectors: count_connectors(&normalized_words),
        conditionals: count_conditionals(&normalized_words),
        technical_refs: technical_ref_score(text),
        commas: count_char(text, ','),
        first_word,
        question,
        imperative,
        trivial,
        communication,
        confirmation,
    }
}

/// A text without any terminator still counts as one sentence.
fn count_sentences(text: &str) -> usize {
    let terminators = text
        .chars()
        .filter(|letter| matches!(letter, '.' | '!' | ';'))
        .count();
    terminators.max(1)
}

fn count_list_items(text: &str) -> usize {
    let mut count = 0;
    for line in text.lines() {
        let stripped = line.trim_start();
        if stripped.is_empty() {
            continue;
        }
        if stripped.starts_with("- ") || stripped.starts_with("• ") {
            count += 1;
            continue;
        }
        // Numbered item: digits, then one of `.`/`)`/`:`, then a space
        if stripped.starts_with(|letter: char| letter.is_ascii_digit()) {
            let rest = stripped.trim_start_matches(|letter: char| letter.is_ascii_digit());
            let mut chars = rest.chars();
            if matches!(chars.next(), Some('.' | ')' | ':')) && chars.next() == Some(' ') {
                count += 1;
            }
        }
    }
    count
}

/// One point per signal type: path segments, backtick spans, dotted
/// identifiers, URL prefixes. Capped at 4 by construction.
fn technical_ref_score(text: &str) -> u8 {
    let mut score = 0;
    if text.split('/').count() >= 3 {
        score += 1;
    }
    if count_char(text, '`') >= 2 {
        score += 1;
    }
    let has_dotted_identifier = text.split_whitespace().any(|word| {
        let segments: Vec<&str> = word.split('.').collect();
        segments.len() >= 3
            && segments
                .iter()
                .filter(|segment| !segment.is_empty())
                .all(|segment| segment.chars().all(char::is_alphanumeric))
    });
    if has_dotted_identifier {
        score += 1;
    }
    if text.contains("http://") || text.contains("https://") {
        score += 1;
    }
    score
}

fn is_question(text: &str, first_word: &str) -> bool {
    text.trim_end().ends_with('?') || vocab::INTERROGATIVES.contains(&first_word)
}

fn is_trivial(normalized_words: &[&str], word_count: usize) -> bool {
    if word_count > 3 {
        return false;
    }
    normalized_words.iter().all(|word| {
        let stripped = word.trim_matches(EDGE_PUNCTUATION);
        vocab::TRIVIAL_WORDS.contains(&stripped) || !word.chars().any(char::is_alphabetic)
    })
}

fn is_imperative(first_word: &str, question: bool, word_count: usize) -> bool {
    if question || word_count < 2 {
        return false;
    }
    !vocab::NON_ACTION_OPENERS.contains(&first_word)
}

/// Classify an imperative's verb as communication (fast) or action (slow).
///
/// A communication verb with an action object ("show me the API code") is
/// still action work; an unknown verb defaults to action.
fn is_communication(first_word: &str, normalized: &str) -> bool {
    if vocab::ACTION_VERBS.contains(&first_word) {
        return false;
    }
    if !vocab::COMMUNICATION_VERBS.contains(&first_word) {
        return false;
    }
    if vocab::COMMUNICATION_OBJECTS
        .iter()
        .any(|object| normalized.contains(object))
    {
        return true;
    }
    if vocab::ACTION_OBJECTS
        .iter()
        .any(|object| normalized.contains(object))
    {
        return false;
    }
    true
}

/// A short message opening with an affirmation/negation is a confirmation
/// unless a later word is an action verb ("Non, déploie avec Sonnet").
fn is_confirmation(normalized_words: &[&str], word_count: usize, first_word: &str) -> bool {
    if word_count > 10 || !vocab::CONFIRMATION_STARTERS.contains(&first_word) {
        return false;
    }
    normalized_words
        .iter()
        .skip(1)
        .all(|word| !vocab::CONFIRMATION_BREAKERS.contains(word))
}

/// Singles and pairs are independent markers, so "and then" scores both
/// the pair and the bare "then".
fn count_connectors(normalized_words: &[&str]) -> usize {
    let singles = normalized_words
        .iter()
        .filter(|word| vocab::CONNECTORS_SINGLE.contains(word))
        .count();
    let pairs = normalized_words
        .windows(2)
        .filter(|pair| vocab::CONNECTOR_PAIRS.contains(&(pair[0], pair[1])))
        .count();
    singles + pairs
}

fn count_conditionals(normalized_words: &[&str]) -> usize {
    normalized_words
        .iter()
        .filter(|word| vocab::CONDITIONALS.contains(word))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_degenerate_not_an_error() {
        let features = extract("");
        assert_eq!(features.word_count, 0);
        assert_eq!(features.sentence_count, 1);
        assert_eq!(features.technical_refs, 0);
        assert!(!features.question);
        assert!(!features.imperative);
    }

    #[test]
    fn test_sentence_count_floored_at_one() {
        assert_eq!(extract("no terminator here").sentence_count, 1);
        assert_eq!(extract("One. Two! Three;").sentence_count, 3);
    }

    #[test]
    fn test_list_items() {
        let text = "Do the following:\n1. build\n2) test\n- deploy\n• notify";
        assert_eq!(extract(text).list_items, 4);
    }

    #[test]
    fn test_numbered_item_requires_space_after_marker() {
        assert_eq!(extract("1.build it").list_items, 0);
        assert_eq!(extract("1. build it").list_items, 1);
    }

    #[test]
    fn test_technical_refs_one_point_per_signal() {
        let text = "Read /etc/nginx/nginx.conf and `app.config.port` at https://example.com";
        // path + backticks + dotted identifier + URL
        assert_eq!(extract(text).technical_refs, 4);
        assert_eq!(extract("plain words only").technical_refs, 0);
    }

    #[test]
    fn test_question_detection() {
        assert!(extract("What is the status?").question);
        assert!(extract("comment ça marche").question);
        assert!(extract("Pourquoi si lent").question);
        assert!(!extract("Fix the build").question);
    }

    #[test]
    fn test_trivial_messages() {
        assert!(extract("ok").trivial);
        assert!(extract("super merci!").trivial);
        assert!(extract("👍").trivial);
        assert!(extract("ok merci 👍").trivial);
        assert!(!extract("fix it").trivial);
    }

    #[test]
    fn test_imperative_detection() {
        assert!(extract("debug the endpoint").imperative);
        assert!(extract("crée une API").imperative);
        // Pronoun opener is not a command
        assert!(!extract("je veux comprendre").imperative);
        // One word is too short to be a command
        assert!(!extract("deploy").imperative);
    }

    #[test]
    fn test_communication_verb_with_object_context() {
        // Communication verb + communication object
        assert!(extract("Show me the status").communication);
        // Communication verb + action object stays action work
        assert!(!extract("Show me the API code").communication);
        // Action verb is never communication
        assert!(!extract("Deploy the service").communication);
        // Unknown verb defaults to action
        assert!(!extract("Fix the service").communication);
        // Communication verb without any object context
        assert!(extract("Explique moi tout").communication);
    }

    #[test]
    fn test_confirmation_detection() {
        assert!(extract("Non c'était bien le spawn").confirmation);
        assert!(extract("Oui c'est le bon routage").confirmation);
        assert!(extract("non").confirmation);
        // Action verb after the opener reclassifies as a command
        assert!(!extract("Non, déploie avec Sonnet").confirmation);
        assert!(!extract("Fix it").confirmation);
    }

    #[test]
    fn test_connectors_and_conditionals() {
        // "and then" scores the pair and the bare "then", plus "puis"
        let features = extract("build it and then test it, puis deploy");
        assert_eq!(features.connectors, 3);
        let features = extract("si ça casse, rollback unless told otherwise");
        assert_eq!(features.conditionals, 2);
    }

    #[test]
    fn test_and_then_counts_single_and_pair() {
        let features = extract("update the docs and then deploy it");
        assert_eq!(features.connectors, 2);
        assert_eq!(features.total_steps(), 3);
    }

    #[test]
    fn test_accented_and_plain_spellings_match_identically() {
        let accented = extract("Déploie le service");
        let plain = extract("Deploie le service");
        assert_eq!(accented.first_word, plain.first_word);
        assert_eq!(accented.imperative, plain.imperative);
    }

    #[test]
    fn test_total_steps() {
        // 1 base + 1 connector + 3 sentences + 3 commas
        let features = extract("First sentence. Then another; and a third. a, b, c, d");
        assert_eq!(features.total_steps(), 4);
        assert_eq!(extract("one thing").total_steps(), 1);
    }
}

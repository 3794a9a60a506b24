//! Text normalization applied once per input before any vocabulary lookup.
//!
//! Every lexical table in [`crate::vocab`] is stored lower-cased and
//! accent-folded, so lookups only match if the input went through the same
//! folding. The fold table covers the Latin diacritics that occur in the
//! bilingual French/English vocabulary.

/// Punctuation stripped from word edges before vocabulary lookups.
pub const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ':', ';'];

/// Replace accented Latin characters with their unaccented counterparts.
///
/// Characters outside the fold table pass through unchanged, so emoji and
/// non-Latin scripts survive (and simply never match any vocabulary).
#[must_use]
pub fn fold_accents(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(letter: char) -> char {
    match letter {
        'à' | 'â' | 'ä' | 'á' | 'ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'î' | 'ï' | 'í' => 'i',
        'ô' | 'ö' | 'ó' | 'õ' => 'o',
        'ù' | 'û' | 'ü' | 'ú' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ÿ' => 'y',
        'À' | 'Â' | 'Ä' | 'Á' | 'Ã' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Î' | 'Ï' | 'Í' => 'I',
        'Ô' | 'Ö' | 'Ó' | 'Õ' => 'O',
        'Ù' | 'Û' | 'Ü' | 'Ú' => 'U',
        'Ç' => 'C',
        'Ñ' => 'N',
        other => other,
    }
}

/// Lower-case, accent-fold, and strip trailing punctuation from one word.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    fold_accents(&word.to_lowercase())
        .trim_end_matches(EDGE_PUNCTUATION)
        .to_owned()
}

/// Lower-case and accent-fold a full text.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    fold_accents(&text.to_lowercase())
}

/// Count occurrences of a single character.
#[must_use]
pub fn count_char(text: &str, needle: char) -> usize {
    text.chars().filter(|letter| *letter == needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold_accents("déploie"), "deploie");
        assert_eq!(fold_accents("État où ça"), "Etat ou ca");
        assert_eq!(fold_accents("plain ascii"), "plain ascii");
    }

    #[test]
    fn test_fold_preserves_non_latin() {
        assert_eq!(fold_accents("👍 ok"), "👍 ok");
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Déploie,"), "deploie");
        assert_eq!(normalize_word("API."), "api");
        assert_eq!(normalize_word("non!?"), "non");
    }

    #[test]
    fn test_count_char() {
        assert_eq!(count_char("a, b, c", ','), 2);
        assert_eq!(count_char("", ','), 0);
    }
}

//! Word tokenizer with stop word removal.
//!
//! Lowercases, splits on non-alphanumeric characters and drops single-character
//! tokens and common English stop words. Used for both catalog tags and queries
//! so the two always land in the same vocabulary.

use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
        "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
        "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each",
        "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
        "hers", "herself", "him", "himself", "his", "how", "if", "in", "into", "is", "it",
        "its", "itself", "just", "me", "more", "most", "my", "myself", "need", "no", "nor",
        "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
        "ourselves", "out", "over", "own", "same", "she", "should", "so", "some", "something",
        "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
        "there", "these", "they", "this", "those", "through", "to", "too", "under", "until",
        "up", "very", "want", "was", "we", "were", "what", "when", "where", "which", "while",
        "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
        "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `word` (already lowercased) is filtered out as a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Tokenize text: lowercase, split on non-alphanumeric, remove stop words.
///
/// Token order follows the input; duplicates are kept so callers can count them.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() > 1 && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("I need something calming for FOCUS");
        assert_eq!(tokens, vec!["calming", "focus"]);
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let tokens = tokenize("sleep-better, rest.");
        assert_eq!(tokens, vec!["sleep", "better", "rest"]);
    }

    #[test]
    fn test_tokenize_keeps_duplicates() {
        assert_eq!(tokenize("calm calm Calm"), vec!["calm", "calm", "calm"]);
    }

    #[test]
    fn test_tokenize_only_stop_words() {
        assert!(tokenize("the and of a I").is_empty());
        assert!(tokenize("").is_empty());
    }
}

/// Keyword extraction from a content title
use crate::hashtag_data::ExtractedData;
use crate::operations::unique_capped;
use crate::tables::{KeywordEntry, Tables};
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_KEYWORDS: usize = 10;
pub const MAX_SEARCH_TERMS: usize = 8;
pub const MAX_RELATED_TOPICS: usize = 12;

/// Titles longer than this are also split into phrases
const PHRASE_SPLIT_THRESHOLD: usize = 20;

static NON_WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("Failed to compile non-word regex"));

static PHRASE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\-|:]").expect("Failed to compile phrase separator regex"));

/// Common English function words and generic verbs
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "among", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "can",
    "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them", "my", "your", "his", "its", "our", "their", "very", "just", "now",
    "then", "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "don", "get", "make", "go", "know", "take", "see", "come", "think", "look",
    "want", "give", "use", "find", "tell", "ask", "work", "seem", "feel", "try", "leave", "call",
];

/// Search terms added when a content type is detected
fn content_type_search_terms(label: &str) -> &'static [&'static str] {
    match label {
        "tutorial" => &["how to", "tutorial", "guide", "beginner"],
        "review" => &["review", "honest opinion", "worth it", "pros and cons"],
        _ => &[],
    }
}

pub fn normalize(title: &str) -> String {
    title.to_lowercase().trim().to_string()
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Split normalized text into candidate keyword tokens, in order, duplicates kept
pub fn tokenize(text: &str) -> Vec<String> {
    NON_WORD_CHARS
        .replace_all(text, " ")
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Whether a keyword pulls in a database entry during extraction
pub fn matches_entry(keyword: &str, entry: &KeywordEntry) -> bool {
    keyword_overlaps(keyword, &entry.keyword)
        || entry.synonyms.iter().any(|syn| syn.contains(keyword))
}

/// Substring match in either direction
pub fn keyword_overlaps(keyword: &str, key: &str) -> bool {
    keyword.contains(key) || key.contains(keyword)
}

/// Content-type labels whose triggers occur in the text, in table order
pub fn detect_content_types<'t>(tables: &'t Tables, text: &str) -> Vec<&'t str> {
    tables
        .content_types
        .iter()
        .filter(|pattern| pattern.matches(text))
        .map(|pattern| pattern.label.as_str())
        .collect()
}

/// Segments of a long title split on `,` `-` `|` `:`
fn title_phrases(text: &str) -> Vec<String> {
    PHRASE_SEPARATORS
        .split(text)
        .map(str::trim)
        .filter(|phrase| phrase.chars().count() > 3)
        .map(str::to_string)
        .collect()
}

/// Extract keywords, search terms and related topics from a title
///
/// Algorithm:
/// 1. Lowercase and trim the title
/// 2. Replace non-word characters with spaces, split on whitespace
/// 3. Drop tokens of 2 characters or fewer and stop words
/// 4. Dedup, keep the first 10 as keywords
/// 5. Expand each keyword against the keyword database
///    (any-direction substring, or synonym substring)
/// 6. Add content-type labels whose triggers appear in the title
/// 7. Add the title itself, and for long titles its `,-|:` segments
/// 8. Dedup and cap each list
///
/// Examples:
/// - "Easy Recipe for Busy Weeknights" → keywords: easy, recipe, busy, weeknights
/// - "iPhone vs Pixel: honest review" → related topics include "review"
pub fn extract(tables: &Tables, title: &str) -> ExtractedData {
    let text = normalize(title);

    let keywords = unique_capped(tokenize(&text), MAX_KEYWORDS);
    let mut search_terms: Vec<String> = Vec::new();
    let mut related_topics: Vec<String> = Vec::new();

    for keyword in &keywords {
        for entry in tables.keywords.iter() {
            if matches_entry(keyword, entry) {
                search_terms.extend(entry.search_terms.iter().cloned());
                related_topics.extend(entry.related.iter().cloned());
            }
        }
    }

    for label in detect_content_types(tables, &text) {
        related_topics.push(label.to_string());
        search_terms.extend(content_type_search_terms(label).iter().map(|s| s.to_string()));
    }

    search_terms.push(text.clone());
    if text.chars().count() > PHRASE_SPLIT_THRESHOLD {
        search_terms.extend(title_phrases(&text));
    }

    let data = ExtractedData {
        title: text,
        keywords,
        search_terms: unique_capped(search_terms, MAX_SEARCH_TERMS),
        related_topics: unique_capped(related_topics, MAX_RELATED_TOPICS),
    };

    log::debug!(
        "extracted {} keywords, {} search terms, {} related topics",
        data.keywords.len(),
        data.search_terms.len(),
        data.related_topics.len()
    );

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::tables::{ContentTypePattern, KeywordDatabase};

    fn fixture_entry(keyword: &str, synonyms: &[&str]) -> KeywordEntry {
        KeywordEntry {
            keyword: keyword.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            related: vec![format!("{keyword}-related")],
            search_terms: vec![format!("{keyword} search")],
            trending: vec![format!("{keyword}trend")],
            popularity: 50,
            engagement: 5.0,
        }
    }

    fn fixture_tables() -> Tables {
        Tables {
            keywords: KeywordDatabase::new(vec![
                fixture_entry("rust", &["ferris", "crab language"]),
                fixture_entry("garden", &["plants"]),
            ]),
            content_types: vec![ContentTypePattern {
                label: "review".to_string(),
                triggers: vec!["review".to_string()],
            }],
            platforms: Platform::ALL
                .iter()
                .map(|p| crate::builtin::platform_strategy(*p))
                .collect(),
        }
    }

    #[test]
    fn test_tokenize_filters_short_and_stop_words() {
        assert_eq!(tokenize("how to build a react app"), vec!["build", "react", "app"]);
    }

    #[test]
    fn test_tokenize_replaces_punctuation() {
        assert_eq!(tokenize("rust-lang: fast!safe"), vec!["rust", "lang", "fast", "safe"]);
    }

    #[test]
    fn test_tokenize_keeps_underscores_and_digits() {
        assert_eq!(tokenize("web_dev 2024 ok"), vec!["web_dev", "2024"]);
    }

    #[test]
    fn test_tokenize_drops_non_ascii_letters() {
        assert_eq!(tokenize("café résumé"), vec!["caf", "sum"]);
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("leave"));
        assert!(!is_stop_word("rust"));
    }

    #[test]
    fn test_extract_empty_title() {
        let data = extract(&Tables::builtin(), "");
        assert!(data.keywords.is_empty());
        assert!(data.related_topics.is_empty());
        assert_eq!(data.search_terms, vec![String::new()]);
    }

    #[test]
    fn test_extract_whitespace_title() {
        let data = extract(&Tables::builtin(), "   \t ");
        assert!(data.keywords.is_empty());
        assert_eq!(data.search_terms, vec![String::new()]);
    }

    #[test]
    fn test_extract_tutorial_title() {
        let data = extract(
            &Tables::builtin(),
            "How to Build a React App in 10 Minutes - Complete Beginner Tutorial",
        );

        assert_eq!(
            data.keywords,
            vec!["build", "react", "app", "minutes", "complete", "beginner", "tutorial"]
        );
        assert!(data.related_topics.contains(&"tutorial".to_string()));
        assert!(data.related_topics.contains(&"reaction".to_string()));
        assert!(data.search_terms.contains(&"how to".to_string()));
        assert_eq!(data.search_terms[0], "tutorial");
        assert_eq!(data.search_terms.len(), MAX_SEARCH_TERMS);
        assert!(data.search_terms.contains(
            &"how to build a react app in 10 minutes - complete beginner tutorial".to_string()
        ));
        assert!(data.search_terms.contains(&"how to build a react app in 10 minutes".to_string()));
    }

    #[test]
    fn test_extract_review_adds_review_terms() {
        let data = extract(&Tables::builtin(), "Honest review");
        assert!(data.related_topics.contains(&"review".to_string()));
        assert!(data.search_terms.contains(&"pros and cons".to_string()));
        assert!(data.search_terms.contains(&"honest opinion".to_string()));
    }

    #[test]
    fn test_extract_two_letter_keyword_is_dropped() {
        let data = extract(&Tables::builtin(), "ai");
        assert!(data.keywords.is_empty());
        assert_eq!(data.search_terms, vec!["ai"]);
    }

    #[test]
    fn test_extract_matches_synonym_substring() {
        let data = extract(&fixture_tables(), "ferris");
        assert_eq!(data.keywords, vec!["ferris"]);
        assert_eq!(data.search_terms, vec!["rust search", "ferris"]);
        assert_eq!(data.related_topics, vec!["rust-related"]);
    }

    #[test]
    fn test_extract_matches_key_inside_keyword() {
        let data = extract(&fixture_tables(), "gardening weekend");
        assert_eq!(data.related_topics, vec!["garden-related"]);
    }

    #[test]
    fn test_extract_matches_keyword_inside_key() {
        let data = extract(&fixture_tables(), "gard");
        assert_eq!(data.related_topics, vec!["garden-related"]);
    }

    #[test]
    fn test_extract_dedups_keywords() {
        let data = extract(&fixture_tables(), "rust Rust RUST crab");
        assert_eq!(data.keywords, vec!["rust", "crab"]);
        assert_eq!(data.related_topics, vec!["rust-related"]);
    }

    #[test]
    fn test_extract_caps_keywords() {
        let title = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let data = extract(&fixture_tables(), title);
        assert_eq!(data.keywords.len(), MAX_KEYWORDS);
        assert_eq!(data.keywords[9], "juliet");
    }

    #[test]
    fn test_extract_long_title_phrases() {
        let data = extract(&fixture_tables(), "Garden tour | spring edition: part one");
        assert!(data.search_terms.contains(&"garden tour".to_string()));
        assert!(data.search_terms.contains(&"spring edition".to_string()));
        assert!(data.search_terms.contains(&"part one".to_string()));
    }

    #[test]
    fn test_extract_short_title_not_split() {
        let data = extract(&fixture_tables(), "rust: a-z");
        assert_eq!(data.search_terms, vec!["rust search", "rust: a-z"]);
    }

    #[test]
    fn test_detect_content_types_in_table_order() {
        let tables = Tables::builtin();
        let labels = detect_content_types(&tables, "funny daily vlog reaction");
        assert_eq!(labels, vec!["vlog", "reaction", "entertainment"]);
    }

    #[test]
    fn test_matches_entry_rules() {
        let entry = fixture_entry("garden", &["plants"]);
        assert!(matches_entry("garden", &entry));
        assert!(matches_entry("gardens", &entry));
        assert!(matches_entry("den", &entry));
        assert!(matches_entry("plan", &entry));
        assert!(!matches_entry("kitchen", &entry));
    }
}

/// List and string operations shared by extraction and generation

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static NON_HASHTAG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9#]").expect("Failed to compile hashtag cleaning regex"));

/// Make items unique (keep first occurrence, preserve order)
pub fn make_unique(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Dedup, then keep at most `cap` items
pub fn unique_capped(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut unique = make_unique(items);
    unique.truncate(cap);
    unique
}

/// Turn a word or phrase into a hashtag: drop whitespace, prefix `#`
pub fn to_hashtag(term: &str) -> String {
    let mut tag = String::with_capacity(term.len() + 1);
    tag.push('#');
    tag.extend(term.chars().filter(|c| !c.is_whitespace()));
    tag
}

/// Strip every character that is not ASCII alphanumeric or `#`
pub fn clean_hashtag(tag: &str) -> String {
    NON_HASHTAG_CHARS.replace_all(tag, "").into_owned()
}

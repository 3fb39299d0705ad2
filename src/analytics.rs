/// Popularity and engagement estimates for individual hashtags
use crate::tables::{KeywordEntry, Tables};
use serde::{Deserialize, Serialize};

const PLACEHOLDER_POPULARITY_MIN: u8 = 30;
const PLACEHOLDER_POPULARITY_SPAN: u32 = 40;
/// Engagement placeholder in tenths: 2.0 ..= 4.9
const PLACEHOLDER_ENGAGEMENT_MIN_TENTHS: u32 = 20;
const PLACEHOLDER_ENGAGEMENT_SPAN_TENTHS: u32 = 30;

/// How hard it is to stand out under a hashtag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    pub fn from_popularity(popularity: u8) -> Difficulty {
        match popularity {
            p if p > 85 => Difficulty::High,
            p if p > 70 => Difficulty::Medium,
            _ => Difficulty::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagAnalytics {
    pub hashtag: String,
    pub popularity: u8,
    pub engagement: f32,
    pub difficulty: Difficulty,
    /// False when the numbers are a placeholder for an unknown hashtag
    pub matched: bool,
}

/// Whether a bare hashtag term belongs to a database entry
fn term_matches(term: &str, entry: &KeywordEntry) -> bool {
    term.contains(entry.keyword.as_str())
        || entry.keyword.contains(term)
        || entry.synonyms.iter().any(|syn| syn.contains(term))
        || entry.trending.iter().any(|t| t == term)
}

/// Bare lowercase term of a hashtag: trimmed, leading `#` removed
pub fn hashtag_term(hashtag: &str) -> String {
    hashtag.trim().trim_start_matches('#').to_lowercase()
}

/// Look up the database entry a hashtag belongs to.
///
/// An exact key wins. Otherwise the first entry in table order that
/// fuzzy-matches, so `#art` finds `art` even though the `ai` synonym
/// "artificial intelligence" also contains it.
pub fn find_entry<'t>(tables: &'t Tables, hashtag: &str) -> Option<&'t KeywordEntry> {
    find_entry_for_term(tables, &hashtag_term(hashtag))
}

fn find_entry_for_term<'t>(tables: &'t Tables, term: &str) -> Option<&'t KeywordEntry> {
    if term.is_empty() {
        return None;
    }
    tables
        .keywords
        .get(term)
        .or_else(|| tables.keywords.iter().find(|entry| term_matches(term, entry)))
}

pub fn analytics_for(tables: &Tables, hashtag: &str) -> HashtagAnalytics {
    let term = hashtag_term(hashtag);
    let (popularity, engagement, matched) = match find_entry_for_term(tables, &term) {
        Some(entry) => (entry.popularity, entry.engagement, true),
        None => {
            let (popularity, engagement) = placeholder_score(&term);
            (popularity, engagement, false)
        }
    };

    HashtagAnalytics {
        hashtag: hashtag.to_string(),
        popularity,
        engagement,
        difficulty: Difficulty::from_popularity(popularity),
        matched,
    }
}

pub fn analytics_for_all(tables: &Tables, hashtags: &[String]) -> Vec<HashtagAnalytics> {
    hashtags.iter().map(|tag| analytics_for(tables, tag)).collect()
}

/// Random score for an unknown hashtag term
fn placeholder_score(term: &str) -> (u8, f32) {
    let mut buf = [0u8; 8];
    let entropy = match getrandom::getrandom(&mut buf) {
        Ok(()) => Some(u64::from_le_bytes(buf)),
        Err(e) => {
            log::warn!("no entropy for placeholder score ({}), using hash of {}", e, term);
            None
        }
    };
    score_from_seed(placeholder_seed(term, entropy))
}

/// Entropy when available, else a stable hash of the term
fn placeholder_seed(term: &str, entropy: Option<u64>) -> u64 {
    entropy.unwrap_or_else(|| fnv1a(term))
}

fn score_from_seed(seed: u64) -> (u8, f32) {
    let low = (seed & 0xffff_ffff) as u32;
    let high = (seed >> 32) as u32;
    let popularity = PLACEHOLDER_POPULARITY_MIN + (low % PLACEHOLDER_POPULARITY_SPAN) as u8;
    let tenths = PLACEHOLDER_ENGAGEMENT_MIN_TENTHS + high % PLACEHOLDER_ENGAGEMENT_SPAN_TENTHS;
    (popularity, tenths as f32 / 10.0)
}

fn fnv1a(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

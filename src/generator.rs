/// Per-platform hashtag generation from extracted title data
use crate::extractor::{detect_content_types, keyword_overlaps};
use crate::hashtag_data::{ExtractedData, PlatformHashtags};
use crate::operations::{clean_hashtag, make_unique, to_hashtag};
use crate::platform::Platform;
use crate::tables::Tables;

const RELATED_TOPIC_TAGS: usize = 6;
const DATABASE_TRENDING_TAGS: usize = 3;
const PLATFORM_TRENDING_TAGS: usize = 4;
const CONTENT_TYPE_TAGS: usize = 2;

/// Tags at or under this length are dropped after cleaning
const MIN_TAG_LEN: usize = 2;

/// Build the hashtag list for one platform.
///
/// Order of contributions (later truncation keeps a prefix, so this matters):
/// keywords, the first related topics, database trending tags, platform
/// trending tags, content-type tags, then the platform's fixed tail.
pub fn generate(tables: &Tables, data: &ExtractedData, platform: Platform) -> Vec<String> {
    let strategy = tables.strategy(platform);
    let mut hashtags: Vec<String> = Vec::new();

    hashtags.extend(data.keywords.iter().map(|k| to_hashtag(k)));

    hashtags.extend(
        data.related_topics
            .iter()
            .take(RELATED_TOPIC_TAGS)
            .map(|t| to_hashtag(t)),
    );

    for keyword in &data.keywords {
        for entry in tables.keywords.iter() {
            if keyword_overlaps(keyword, &entry.keyword) {
                hashtags.extend(
                    entry
                        .trending
                        .iter()
                        .take(DATABASE_TRENDING_TAGS)
                        .map(|t| format!("#{t}")),
                );
            }
        }
    }

    hashtags.extend(strategy.trending.iter().take(PLATFORM_TRENDING_TAGS).cloned());

    let title = data.title.to_lowercase();
    for label in detect_content_types(tables, &title) {
        let relevant = strategy
            .content_types
            .iter()
            .filter(|ct| ct.contains(label) || label.contains(ct.replacen('#', "", 1).as_str()))
            .take(CONTENT_TYPE_TAGS)
            .cloned();
        hashtags.extend(relevant);
    }

    hashtags.extend(strategy.tail.iter().cloned());

    let cleaned: Vec<String> = make_unique(hashtags)
        .iter()
        .map(|tag| clean_hashtag(tag))
        .filter(|tag| tag.len() > MIN_TAG_LEN)
        .collect();

    // Distinct raw tags can clean to the same string
    let mut result = make_unique(cleaned);
    result.truncate(strategy.max_hashtags);

    log::debug!("generated {} hashtags for {}", result.len(), platform);

    result
}

/// Generate for every platform from the same extracted data
pub fn generate_all(tables: &Tables, data: &ExtractedData) -> PlatformHashtags {
    let mut hashtags = PlatformHashtags::default();
    for platform in Platform::ALL {
        hashtags.set(platform, generate(tables, data, platform));
    }
    hashtags
}

/// Replace one platform's list with a fresh generation
pub fn regenerate(
    tables: &Tables,
    data: &ExtractedData,
    platform: Platform,
    hashtags: &mut PlatformHashtags,
) {
    hashtags.set(platform, generate(tables, data, platform));
}

/// Static reference tables: keyword database, content-type patterns and
/// per-platform strategies.
///
/// The extractor, generator and analytics lookup all read these through a
/// `&Tables`, so callers can swap the compiled-in snapshot for a smaller
/// fixture or a JSON asset.
use crate::builtin;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use thiserror::Error;

/// Semantic metadata for one canonical keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEntry {
    pub keyword: String,
    pub synonyms: Vec<String>,
    pub related: Vec<String>,
    pub search_terms: Vec<String>,
    /// Bare hashtag words, stored without `#`
    pub trending: Vec<String>,
    pub popularity: u8,
    pub engagement: f32,
}

/// Keyword entries in match order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordDatabase {
    entries: Vec<KeywordEntry>,
}

impl KeywordDatabase {
    pub fn new(entries: Vec<KeywordEntry>) -> Self {
        KeywordDatabase { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.entries.iter()
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordEntry> {
        self.entries.iter().find(|e| e.keyword == keyword)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A content-type label and the substrings that reveal it in a title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypePattern {
    pub label: String,
    pub triggers: Vec<String>,
}

impl ContentTypePattern {
    pub fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|t| text.contains(t.as_str()))
    }
}

/// How hashtags are shaped for one platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStrategy {
    pub platform: Platform,
    pub max_hashtags: usize,
    pub character_limit: usize,
    /// Ready-made hashtags, `#` included
    pub trending: Vec<String>,
    pub content_types: Vec<String>,
    /// Appended to every generation for this platform
    pub tail: Vec<String>,
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("malformed tables: {0}")]
    Json(#[from] serde_json::Error),
    #[error("keyword `{0}` appears more than once")]
    DuplicateKeyword(String),
    #[error("no strategy for platform `{0}`")]
    MissingPlatform(Platform),
    #[error("platform `{0}` has more than one strategy")]
    DuplicatePlatform(Platform),
    #[error("platform `{0}` allows zero hashtags")]
    ZeroMaxHashtags(Platform),
    #[error("keyword `{keyword}` has popularity {popularity}, expected 0-100")]
    PopularityOutOfRange { keyword: String, popularity: u8 },
}

/// Everything the extraction and generation pipeline reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tables {
    pub keywords: KeywordDatabase,
    pub content_types: Vec<ContentTypePattern>,
    pub platforms: Vec<PlatformStrategy>,
}

impl Tables {
    /// The compiled-in snapshot
    pub fn builtin() -> Tables {
        Tables {
            keywords: builtin::keyword_database(),
            content_types: builtin::content_type_patterns(),
            platforms: builtin::platform_strategies(),
        }
    }

    /// Load a substitute snapshot and check it before use
    pub fn from_json(json: &str) -> Result<Tables, TableError> {
        let tables: Tables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        for entry in self.keywords.iter() {
            if !seen.insert(entry.keyword.as_str()) {
                return Err(TableError::DuplicateKeyword(entry.keyword.clone()));
            }
            if entry.popularity > 100 {
                return Err(TableError::PopularityOutOfRange {
                    keyword: entry.keyword.clone(),
                    popularity: entry.popularity,
                });
            }
        }

        for platform in Platform::ALL {
            let mut strategies = self.platforms.iter().filter(|s| s.platform == platform);
            let strategy = strategies.next().ok_or(TableError::MissingPlatform(platform))?;
            if strategies.next().is_some() {
                return Err(TableError::DuplicatePlatform(platform));
            }
            if strategy.max_hashtags == 0 {
                return Err(TableError::ZeroMaxHashtags(platform));
            }
        }

        Ok(())
    }

    /// Strategy for a platform. Validated tables always have one; unvalidated
    /// tables missing it fall back to the builtin strategy.
    pub fn strategy(&self, platform: Platform) -> Cow<'_, PlatformStrategy> {
        match self.platforms.iter().find(|s| s.platform == platform) {
            Some(strategy) => Cow::Borrowed(strategy),
            None => Cow::Owned(builtin::platform_strategy(platform)),
        }
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = Tables::builtin();
        assert!(tables.validate().is_ok());
        assert_eq!(tables.keywords.len(), 15);
        assert_eq!(tables.content_types.len(), 8);
        assert_eq!(tables.platforms.len(), 3);
    }

    #[test]
    fn test_builtin_keyword_order() {
        let tables = Tables::builtin();
        let keys: Vec<&str> = tables.keywords.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keys[0], "ai");
        assert_eq!(keys[1], "technology");
        assert_eq!(keys[14], "music");
    }

    #[test]
    fn test_builtin_strategies() {
        let tables = Tables::builtin();
        assert_eq!(tables.strategy(Platform::Youtube).max_hashtags, 15);
        assert_eq!(tables.strategy(Platform::Facebook).max_hashtags, 8);
        assert_eq!(tables.strategy(Platform::Instagram).max_hashtags, 30);
        assert_eq!(tables.strategy(Platform::Facebook).tail, vec!["#share", "#community"]);
    }

    #[test]
    fn test_json_round_trip() {
        let tables = Tables::builtin();
        let json = tables.to_json().unwrap();
        let loaded = Tables::from_json(&json).unwrap();
        assert_eq!(loaded, tables);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Tables::from_json("{not json").unwrap_err();
        assert!(matches!(err, TableError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_keyword() {
        let mut tables = Tables::builtin();
        let first = tables.keywords.iter().next().cloned().unwrap();
        let mut entries: Vec<KeywordEntry> = tables.keywords.iter().cloned().collect();
        entries.push(first);
        tables.keywords = KeywordDatabase::new(entries);

        assert!(matches!(tables.validate(), Err(TableError::DuplicateKeyword(k)) if k == "ai"));
    }

    #[test]
    fn test_validate_rejects_missing_platform() {
        let mut tables = Tables::builtin();
        tables.platforms.retain(|s| s.platform != Platform::Instagram);

        assert!(matches!(
            tables.validate(),
            Err(TableError::MissingPlatform(Platform::Instagram))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_platform() {
        let mut tables = Tables::builtin();
        let youtube = tables.strategy(Platform::Youtube).into_owned();
        tables.platforms.push(youtube);

        assert!(matches!(
            tables.validate(),
            Err(TableError::DuplicatePlatform(Platform::Youtube))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let mut tables = Tables::builtin();
        tables.platforms[1].max_hashtags = 0;

        assert!(matches!(
            tables.validate(),
            Err(TableError::ZeroMaxHashtags(Platform::Facebook))
        ));
    }

    #[test]
    fn test_validate_rejects_popularity_over_100() {
        let mut entries: Vec<KeywordEntry> = Tables::builtin().keywords.iter().cloned().collect();
        entries[2].popularity = 101;
        let tables = Tables {
            keywords: KeywordDatabase::new(entries),
            ..Tables::builtin()
        };

        assert!(matches!(
            tables.validate(),
            Err(TableError::PopularityOutOfRange { popularity: 101, .. })
        ));
    }

    #[test]
    fn test_strategy_falls_back_to_builtin() {
        let tables = Tables {
            platforms: Vec::new(),
            ..Tables::builtin()
        };
        let strategy = tables.strategy(Platform::Youtube);
        assert!(matches!(strategy, Cow::Owned(_)));
        assert_eq!(strategy.max_hashtags, 15);
    }

    #[test]
    fn test_strategy_borrows_configured_table() {
        let tables = Tables::builtin();
        let strategy = tables.strategy(Platform::Instagram);
        assert!(matches!(strategy, Cow::Borrowed(_)));
        assert!(std::ptr::eq(strategy.as_ref(), &tables.platforms[2]));
    }

    #[test]
    fn test_content_type_pattern_matches() {
        let pattern = ContentTypePattern {
            label: "review".to_string(),
            triggers: vec!["review".to_string(), "vs".to_string()],
        };
        assert!(pattern.matches("iphone vs pixel"));
        assert!(!pattern.matches("morning routine"));
    }
}

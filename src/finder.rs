/// Title-to-hashtags pipeline bound to one set of tables
use crate::analytics::{self, HashtagAnalytics};
use crate::extractor;
use crate::generator;
use crate::hashtag_data::{ExtractedData, PlatformHashtags, Report};
use crate::platform::Platform;
use crate::tables::Tables;
use thiserror::Error;

/// Longest title the input box accepts
pub const MAX_TITLE_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("Please enter a title to generate hashtags")]
    Empty,
    #[error("title is {len} characters, the limit is {max}")]
    TooLong { len: usize, max: usize },
}

pub fn validate_title(title: &str) -> Result<&str, TitleError> {
    if title.trim().is_empty() {
        return Err(TitleError::Empty);
    }
    let len = title.chars().count();
    if len > MAX_TITLE_CHARS {
        return Err(TitleError::TooLong {
            len,
            max: MAX_TITLE_CHARS,
        });
    }
    Ok(title)
}

#[derive(Debug, Clone, Default)]
pub struct HashtagFinder {
    tables: Tables,
}

impl HashtagFinder {
    pub fn new(tables: Tables) -> Self {
        HashtagFinder { tables }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn extract(&self, title: &str) -> ExtractedData {
        extractor::extract(&self.tables, title)
    }

    pub fn generate(&self, data: &ExtractedData, platform: Platform) -> Vec<String> {
        generator::generate(&self.tables, data, platform)
    }

    pub fn generate_all(&self, data: &ExtractedData) -> PlatformHashtags {
        generator::generate_all(&self.tables, data)
    }

    pub fn analytics_for(&self, hashtag: &str) -> HashtagAnalytics {
        analytics::analytics_for(&self.tables, hashtag)
    }

    /// Validate, extract and generate for every platform
    pub fn run(&self, title: &str) -> Result<(ExtractedData, PlatformHashtags), TitleError> {
        let title = validate_title(title)?;
        let extracted = self.extract(title);
        let hashtags = self.generate_all(&extracted);
        log::info!(
            "generated {} keywords and {} hashtags",
            extracted.keywords.len(),
            hashtags.total()
        );
        Ok((extracted, hashtags))
    }

    /// Full export document, with analytics for every distinct hashtag
    pub fn report(&self, title: &str) -> Result<Report, TitleError> {
        let (extracted, hashtags) = self.run(title)?;

        let mut seen = std::collections::HashSet::new();
        let distinct: Vec<String> = Platform::ALL
            .iter()
            .flat_map(|p| hashtags.get(*p).iter().cloned())
            .filter(|tag| seen.insert(tag.clone()))
            .collect();
        let analytics = analytics::analytics_for_all(&self.tables, &distinct);

        Ok(Report {
            title: title.trim().to_string(),
            extracted,
            hashtags,
            analytics,
        })
    }
}

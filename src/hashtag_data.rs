/// Data structures for Hashtag Finder
use crate::analytics::HashtagAnalytics;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keywords, search terms and related topics pulled from one title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    /// Normalized title the data was extracted from
    #[serde(default)]
    pub title: String,
    pub keywords: Vec<String>,
    pub search_terms: Vec<String>,
    pub related_topics: Vec<String>,
}

impl ExtractedData {
    pub fn search_terms_copy_text(&self) -> String {
        self.search_terms.join(", ")
    }
}

/// Generated hashtags for every platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformHashtags {
    pub youtube: Vec<String>,
    pub facebook: Vec<String>,
    pub instagram: Vec<String>,
}

impl PlatformHashtags {
    pub fn get(&self, platform: Platform) -> &[String] {
        match platform {
            Platform::Youtube => &self.youtube,
            Platform::Facebook => &self.facebook,
            Platform::Instagram => &self.instagram,
        }
    }

    pub fn get_mut(&mut self, platform: Platform) -> &mut Vec<String> {
        match platform {
            Platform::Youtube => &mut self.youtube,
            Platform::Facebook => &mut self.facebook,
            Platform::Instagram => &mut self.instagram,
        }
    }

    pub fn set(&mut self, platform: Platform, hashtags: Vec<String>) {
        *self.get_mut(platform) = hashtags;
    }

    /// Remove one hashtag the user rejected
    pub fn remove(&mut self, platform: Platform, index: usize) -> Option<String> {
        let tags = self.get_mut(platform);
        (index < tags.len()).then(|| tags.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        Platform::ALL.iter().all(|p| self.get(*p).is_empty())
    }

    pub fn total(&self) -> usize {
        Platform::ALL.iter().map(|p| self.get(*p).len()).sum()
    }

    /// Clipboard text for one platform
    pub fn copy_text(&self, platform: Platform) -> String {
        self.get(platform).join(" ")
    }
}

/// Export document for a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub extracted: ExtractedData,
    pub hashtags: PlatformHashtags,
    pub analytics: Vec<HashtagAnalytics>,
}

impl Report {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Keywords: {}", self.extracted.keywords.join(", "))?;
        writeln!(f, "Search terms: {}", self.extracted.search_terms_copy_text())?;
        writeln!(f, "Related topics: {}", self.extracted.related_topics.join(", "))?;
        for platform in Platform::ALL {
            writeln!(f)?;
            writeln!(
                f,
                "{} ({}):",
                platform.display_name(),
                self.hashtags.get(platform).len()
            )?;
            writeln!(f, "{}", self.hashtags.copy_text(platform))?;
        }
        Ok(())
    }
}

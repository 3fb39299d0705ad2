/// Storage serialization utilities for the host page's local storage
///
/// The host owns persistence; these are the records it reads and writes.

use crate::hashtag_data::PlatformHashtags;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Most recent generations kept in history
pub const HISTORY_LIMIT: usize = 20;

/// One past generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
    /// Milliseconds since the Unix epoch, supplied by the caller
    pub timestamp: f64,
    pub hashtags: PlatformHashtags,
}

impl HistoryEntry {
    pub fn new(title: String, timestamp: f64, hashtags: PlatformHashtags) -> HistoryEntry {
        HistoryEntry {
            id: Uuid::new_v4().to_string(),
            title,
            timestamp,
            hashtags,
        }
    }
}

/// Reusable title text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub title: String,
}

impl Template {
    pub fn new(name: String, title: String) -> Template {
        Template {
            id: Uuid::new_v4().to_string(),
            name,
            title,
        }
    }
}

/// Root storage structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageData {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl StorageData {
    pub fn new() -> Self {
        StorageData {
            history: Vec::new(),
            templates: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Add a generation to the front of history. Recording the same title
    /// again replaces the older entry.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.history.retain(|e| e.title != entry.title);
        self.history.insert(0, entry);
        self.history.truncate(HISTORY_LIMIT);
    }

    pub fn remove_history(&mut self, entry_id: &str) -> bool {
        let original_len = self.history.len();
        self.history.retain(|e| e.id != entry_id);
        self.history.len() < original_len
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn add_template(&mut self, template: Template) {
        self.templates.push(template);
    }

    pub fn remove_template(&mut self, template_id: &str) -> bool {
        let original_len = self.templates.len();
        self.templates.retain(|t| t.id != template_id);
        self.templates.len() < original_len
    }

    pub fn get_template(&self, template_id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == template_id)
    }

    pub fn rename_template(&mut self, template_id: &str, new_name: String) -> bool {
        self.templates
            .iter_mut()
            .find(|t| t.id == template_id)
            .map(|template| {
                template.name = new_name;
            })
            .is_some()
    }
}

impl Default for StorageData {
    fn default() -> Self {
        Self::new()
    }
}

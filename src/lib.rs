/// Hashtag Finder - title keyword extraction and per-platform hashtags
/// Built with Rust + WASM

pub mod analytics;
mod builtin;
pub mod extractor;
pub mod finder;
pub mod generator;
pub mod hashtag_data;
mod operations;
pub mod platform;
pub mod storage;
pub mod tables;

pub use analytics::{Difficulty, HashtagAnalytics};
pub use finder::{HashtagFinder, TitleError, validate_title};
pub use hashtag_data::{ExtractedData, PlatformHashtags, Report};
pub use platform::{ParsePlatformError, Platform};
pub use tables::{Tables, TableError};

use serde::Serialize;
use std::sync::LazyLock;
use wasm_bindgen::prelude::*;

static FINDER: LazyLock<HashtagFinder> = LazyLock::new(HashtagFinder::default);

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub fn platforms() -> Vec<String> {
    Platform::ALL.iter().map(|p| p.as_str().to_string()).collect()
}

#[wasm_bindgen]
pub fn extract_keywords(title: &str) -> Result<JsValue, JsError> {
    to_js(&FINDER.extract(title))
}

#[wasm_bindgen]
pub fn generate_hashtags(extracted: JsValue, platform: &str) -> Result<Vec<String>, JsError> {
    let platform: Platform = platform.parse()?;
    let data: ExtractedData =
        serde_wasm_bindgen::from_value(extracted).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(FINDER.generate(&data, platform))
}

/// Validate the title, then return `{ extracted, hashtags }`
#[wasm_bindgen]
pub fn generate_for_title(title: &str) -> Result<JsValue, JsError> {
    #[derive(Serialize)]
    struct Generated {
        extracted: ExtractedData,
        hashtags: PlatformHashtags,
    }

    let (extracted, hashtags) = FINDER.run(title)?;
    to_js(&Generated { extracted, hashtags })
}

#[wasm_bindgen]
pub fn hashtag_analytics(hashtag: &str) -> Result<JsValue, JsError> {
    to_js(&FINDER.analytics_for(hashtag))
}

/// JSON export document for the title
#[wasm_bindgen]
pub fn export_report(title: &str) -> Result<String, JsError> {
    let report = FINDER.report(title)?;
    report.to_json().map_err(|e| JsError::new(&e.to_string()))
}

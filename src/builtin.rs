/// Compiled-in reference data
use crate::platform::Platform;
use crate::tables::{ContentTypePattern, KeywordDatabase, KeywordEntry, PlatformStrategy};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn entry(
    keyword: &str,
    synonyms: &[&str],
    related: &[&str],
    search_terms: &[&str],
    trending: &[&str],
    popularity: u8,
    engagement: f32,
) -> KeywordEntry {
    KeywordEntry {
        keyword: keyword.to_string(),
        synonyms: strings(synonyms),
        related: strings(related),
        search_terms: strings(search_terms),
        trending: strings(trending),
        popularity,
        engagement,
    }
}

pub fn keyword_database() -> KeywordDatabase {
    KeywordDatabase::new(vec![
        // Technology & AI
        entry(
            "ai",
            &["artificial intelligence", "machine learning", "automation", "robot", "smart", "intelligent"],
            &["tech", "future", "innovation", "digital", "algorithm", "data", "coding", "programming"],
            &["ai tutorial", "artificial intelligence explained", "machine learning basics", "ai tools"],
            &["chatgpt", "openai", "aitools", "machinelearning", "artificialintelligence", "automation"],
            95,
            8.7,
        ),
        entry(
            "technology",
            &["tech", "digital", "innovation", "software", "hardware", "gadget"],
            &["ai", "coding", "programming", "app", "website", "computer", "mobile", "internet"],
            &["tech review", "latest technology", "tech news", "gadget unboxing"],
            &["tech2024", "innovation", "digitaltransformation", "techreview", "gadgets", "software"],
            88,
            7.2,
        ),
        // Business
        entry(
            "business",
            &["entrepreneur", "startup", "company", "corporate", "enterprise", "commerce"],
            &["marketing", "sales", "money", "finance", "leadership", "strategy", "growth", "success"],
            &["business tips", "startup advice", "entrepreneurship", "business growth"],
            &["entrepreneur", "startup", "businesstips", "success", "leadership", "marketing"],
            82,
            6.8,
        ),
        entry(
            "marketing",
            &["advertising", "promotion", "branding", "campaign", "digital marketing"],
            &["business", "sales", "social media", "content", "strategy", "growth"],
            &["marketing strategy", "digital marketing", "social media marketing", "content marketing"],
            &["digitalmarketing", "socialmediamarketing", "contentmarketing", "branding", "advertising"],
            79,
            6.5,
        ),
        // Health & fitness
        entry(
            "fitness",
            &["workout", "exercise", "training", "gym", "health", "wellness"],
            &["nutrition", "diet", "strength", "cardio", "yoga", "running", "muscle", "weight"],
            &["workout routine", "fitness tips", "exercise tutorial", "gym workout"],
            &["fitness", "workout", "gym", "health", "wellness", "fitnessmotivation", "exercise"],
            90,
            8.1,
        ),
        entry(
            "workout",
            &["exercise", "training", "fitness", "gym", "routine"],
            &["health", "strength", "cardio", "muscle", "weight", "nutrition", "wellness"],
            &["home workout", "gym workout", "workout routine", "exercise tutorial"],
            &["homeworkout", "gymworkout", "workoutmotivation", "fitness", "exercise", "training"],
            85,
            7.9,
        ),
        // Food
        entry(
            "food",
            &["cooking", "recipe", "cuisine", "meal", "dish", "kitchen"],
            &["chef", "ingredients", "healthy", "delicious", "restaurant", "baking", "nutrition"],
            &["easy recipes", "cooking tutorial", "food review", "healthy meals"],
            &["foodie", "recipe", "cooking", "healthyfood", "delicious", "homecooking", "chef"],
            92,
            8.4,
        ),
        entry(
            "recipe",
            &["cooking", "food", "dish", "meal", "cuisine"],
            &["ingredients", "kitchen", "chef", "healthy", "easy", "quick", "delicious"],
            &["easy recipe", "quick recipe", "healthy recipe", "cooking tutorial"],
            &["easyrecipe", "quickrecipe", "healthyrecipe", "homecooking", "foodprep", "cooking"],
            84,
            7.6,
        ),
        // Travel
        entry(
            "travel",
            &["adventure", "journey", "trip", "vacation", "explore", "wanderlust"],
            &["destination", "culture", "photography", "nature", "city", "country", "experience"],
            &["travel guide", "travel tips", "travel vlog", "destination guide"],
            &["travel", "adventure", "explore", "wanderlust", "vacation", "travelgram", "destination"],
            89,
            8.3,
        ),
        // Gaming
        entry(
            "gaming",
            &["game", "gamer", "play", "video game", "esports"],
            &["streaming", "twitch", "youtube", "console", "pc", "mobile", "tournament"],
            &["gaming tutorial", "game review", "gaming tips", "gameplay"],
            &["gaming", "gamer", "gameplay", "gamereview", "esports", "streaming", "videogames"],
            93,
            8.9,
        ),
        // Education
        entry(
            "tutorial",
            &["guide", "howto", "lesson", "course", "training", "education"],
            &["learning", "tips", "beginner", "step by step", "easy", "quick"],
            &["tutorial", "how to", "beginner guide", "step by step"],
            &["tutorial", "howto", "guide", "tips", "learn", "education", "beginner"],
            76,
            6.1,
        ),
        // Lifestyle
        entry(
            "lifestyle",
            &["life", "daily", "routine", "personal", "living"],
            &["home", "family", "wellness", "productivity", "habits", "mindset"],
            &["lifestyle tips", "daily routine", "life advice", "personal development"],
            &["lifestyle", "dailyroutine", "selfcare", "productivity", "mindset", "wellness"],
            81,
            7.0,
        ),
        // Art
        entry(
            "art",
            &["creative", "design", "artistic", "drawing", "painting"],
            &["creativity", "inspiration", "visual", "color", "sketch", "digital art"],
            &["art tutorial", "drawing tips", "creative process", "art techniques"],
            &["art", "artist", "creative", "drawing", "painting", "digitalart", "artwork"],
            78,
            7.4,
        ),
        // Fashion
        entry(
            "fashion",
            &["style", "outfit", "clothing", "trendy", "chic"],
            &["beauty", "makeup", "accessories", "designer", "trend", "look"],
            &["fashion tips", "style guide", "outfit ideas", "fashion trends"],
            &["fashion", "style", "outfit", "ootd", "fashionista", "trendy", "stylish"],
            87,
            8.0,
        ),
        // Music
        entry(
            "music",
            &["song", "audio", "sound", "melody", "rhythm"],
            &["artist", "musician", "instrument", "concert", "album", "playlist"],
            &["music tutorial", "song cover", "music review", "how to play"],
            &["music", "song", "musician", "cover", "playlist", "newmusic", "artist"],
            91,
            8.6,
        ),
    ])
}

pub fn content_type_patterns() -> Vec<ContentTypePattern> {
    fn pattern(label: &str, triggers: &[&str]) -> ContentTypePattern {
        ContentTypePattern {
            label: label.to_string(),
            triggers: strings(triggers),
        }
    }

    vec![
        pattern("tutorial", &["how to", "tutorial", "guide", "step by step", "learn", "beginner"]),
        pattern("review", &["review", "unboxing", "test", "comparison", "vs", "honest"]),
        pattern("tips", &["tips", "tricks", "hacks", "secrets", "advice", "best"]),
        pattern("vlog", &["vlog", "day in life", "daily", "routine", "behind scenes"]),
        pattern("challenge", &["challenge", "try", "attempt", "experiment", "test"]),
        pattern("reaction", &["reaction", "react", "responds", "watching", "first time"]),
        pattern("news", &["news", "update", "announcement", "breaking", "latest"]),
        pattern("entertainment", &["funny", "comedy", "entertainment", "fun", "hilarious"]),
    ]
}

pub fn platform_strategy(platform: Platform) -> PlatformStrategy {
    match platform {
        Platform::Youtube => PlatformStrategy {
            platform,
            max_hashtags: 15,
            character_limit: 500,
            trending: strings(&["#shorts", "#viral", "#trending", "#youtube", "#subscribe", "#2024", "#new"]),
            content_types: strings(&["#tutorial", "#howto", "#review", "#unboxing", "#tips", "#guide", "#vlog"]),
            tail: strings(&["#youtube", "#subscribe"]),
        },
        Platform::Facebook => PlatformStrategy {
            platform,
            max_hashtags: 8,
            character_limit: 63206,
            trending: strings(&["#facebook", "#social", "#community", "#share", "#connect", "#local"]),
            content_types: strings(&["#news", "#update", "#community", "#family", "#friends", "#local"]),
            tail: strings(&["#share", "#community"]),
        },
        Platform::Instagram => PlatformStrategy {
            platform,
            max_hashtags: 30,
            character_limit: 2200,
            trending: strings(&[
                "#instagram",
                "#insta",
                "#instagood",
                "#photooftheday",
                "#love",
                "#beautiful",
                "#happy",
                "#follow",
                "#like4like",
                "#instadaily",
            ]),
            content_types: strings(&["#photo", "#pic", "#selfie", "#ootd", "#mood", "#vibes", "#aesthetic", "#art"]),
            tail: strings(&["#instamood", "#photooftheday", "#instagood"]),
        },
    }
}

pub fn platform_strategies() -> Vec<PlatformStrategy> {
    Platform::ALL.iter().map(|p| platform_strategy(*p)).collect()
}

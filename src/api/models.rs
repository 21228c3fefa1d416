use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
    /// Word cap for the summary; the configured default applies when
    /// omitted.
    pub target_length: Option<usize>,
}

/// Combined scrape and summary payload returned on success.
#[derive(Serialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub url: String,
    pub title: String,
    pub content_stats: ContentStats,
    pub summary: String,
    pub keywords: Vec<String>,
    pub key_points: Vec<String>,
    pub analysis: Analysis,
}

#[derive(Serialize)]
pub struct ContentStats {
    pub word_count: usize,
    pub char_count: usize,
}

#[derive(Serialize)]
pub struct Analysis {
    pub original_length: usize,
    pub summary_length: usize,
    pub compression_ratio: f64,
}

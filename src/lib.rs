pub mod api;
pub mod config;
pub mod error;
pub mod scraper;
pub mod summarizer;

use std::sync::Arc;
use config::Config;

pub use scraper::{ScrapeResult, extract};
pub use summarizer::{SummaryResult, summarize};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Shared fetch client; cloning is cheap and the pool is reused.
    pub http: reqwest::Client,
}

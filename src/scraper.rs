//! Web page fetching and readable-content extraction.
//!
//! Uses reqwest for fetching and scraper for HTML parsing.

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use scraper::{Html, Selector};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::error::{AppError, Result};

/// Browser User-Agent sent with every fetch; some servers reject the
/// default client identifier outright.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Sentinel returned when neither a `<title>` nor an `<h1>` exists.
pub const NO_TITLE: &str = "No title found";

/// Build the connection-reusing client used for fetches. Hosting layers
/// construct one at startup and pass it through; `reqwest::Client` is
/// internally pooled and `Send + Sync`, so one handle can serve
/// concurrent requests.
pub fn build_client() -> Client {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
}

// Fallback client for callers that don't inject their own
static CLIENT: Lazy<Client> = Lazy::new(build_client);

// Create static selectors to avoid recompiling them each time
static NOISE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script, style, nav, header, footer, aside").expect("Failed to parse noise selector")
});

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("title").expect("Failed to parse title selector")
});

static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1").expect("Failed to parse h1 selector")
});

static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("body").expect("Failed to parse body selector")
});

/// Content container queries, most specific first. The first one that
/// matches any element wins; the rest are never tried.
const CONTENT_QUERIES: [&str; 7] = [
    "article",
    ".post-content",
    ".entry-content",
    ".content",
    "main",
    ".post-body",
    ".article-content",
];

static CONTENT_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    CONTENT_QUERIES
        .iter()
        .map(|query| Selector::parse(query).expect("Failed to parse content selector"))
        .collect()
});

/// Successfully scraped page, before any summarization.
#[derive(Debug, Clone)]
pub struct ScrapedPage {
    pub url: String,
    pub title: String,
    pub content: String,
    pub word_count: usize,
    pub char_count: usize,
}

/// Outcome record of one fetch attempt, as handed to presentation layers.
///
/// On failure only `url` and `error` are populated; the remaining fields
/// are omitted from serialized output.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeResult {
    pub success: bool,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeResult {
    fn failure(url: &str, err: &AppError) -> Self {
        ScrapeResult {
            success: false,
            url: url.to_string(),
            title: None,
            content: None,
            word_count: None,
            char_count: None,
            error: Some(err.to_string()),
        }
    }
}

impl From<ScrapedPage> for ScrapeResult {
    fn from(page: ScrapedPage) -> Self {
        ScrapeResult {
            success: true,
            url: page.url,
            title: Some(page.title),
            content: Some(page.content),
            word_count: Some(page.word_count),
            char_count: Some(page.char_count),
            error: None,
        }
    }
}

/// Check that a string is an absolute URL with a host before any network
/// use. Nothing is fetched when validation fails.
pub fn validate_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|_| AppError::InvalidUrl(trimmed.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::InvalidUrl(trimmed.to_string()));
    }
    Ok(parsed)
}

/// Single bounded GET. Non-success statuses and transport failures both
/// surface as errors; there are no retries.
async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    let response = client.get(url.as_str()).send().await?.error_for_status()?;
    let html = response.text().await?;
    Ok(html)
}

/// Detach non-content subtrees (scripts, styles, navigation and page
/// chrome) from the working tree.
fn strip_noise(document: &mut Html) {
    let noise: Vec<_> = document.select(&NOISE_SELECTOR).map(|element| element.id()).collect();
    for id in noise {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Walk the prioritized container queries and return the text of the
/// first match, degrading to the body and finally the whole document.
/// Always yields some string.
fn select_content(document: &Html) -> String {
    for selector in CONTENT_SELECTORS.iter() {
        if let Some(element) = document.select(selector).next() {
            return element.text().collect();
        }
    }

    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        return body.text().collect();
    }

    document.root_element().text().collect()
}

/// Resolve a title from `<title>`, then the first `<h1>`, then the
/// sentinel. The chain advances only when an element is absent.
fn resolve_title(document: &Html) -> String {
    for selector in [&*TITLE_SELECTOR, &*H1_SELECTOR] {
        if let Some(element) = document.select(selector).next() {
            return element.text().collect::<String>().trim().to_string();
        }
    }

    NO_TITLE.to_string()
}

/// Collapse whitespace runs to single spaces, then drop every character
/// outside the allow-list (alphanumerics, whitespace and common sentence
/// punctuation), then trim.
pub fn normalize_text(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let filtered: String = collapsed
        .chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '-' | '(' | ')')
        })
        .collect();

    filtered.trim().to_string()
}

/// Fetch a page through the given client and reduce it to a title plus
/// normalized readable text.
pub async fn scrape_page_with(client: &Client, url: &str) -> Result<ScrapedPage> {
    let parsed = validate_url(url)?;

    info!(url = %parsed, "fetching page");
    let html = fetch_page(client, &parsed).await?;
    debug!(bytes = html.len(), "fetched document");

    // Title is resolved before cleaning so an h1 inside a header is
    // still reachable. The parsed tree never crosses an await point.
    let mut document = Html::parse_document(&html);
    let title = resolve_title(&document);
    strip_noise(&mut document);
    let raw_content = select_content(&document);
    drop(document);

    let content = normalize_text(&raw_content);
    let word_count = content.split_whitespace().count();
    let char_count = content.chars().count();
    info!(words = word_count, chars = char_count, "extracted content");

    Ok(ScrapedPage {
        url: parsed.into(),
        title,
        content,
        word_count,
        char_count,
    })
}

/// Variant of [`scrape_page_with`] using the shared fallback client.
pub async fn scrape_page(url: &str) -> Result<ScrapedPage> {
    scrape_page_with(&CLIENT, url).await
}

/// Public extraction operation: every internal failure is folded into a
/// tagged record instead of escaping to the caller.
pub async fn extract(url: &str) -> ScrapeResult {
    match scrape_page(url).await {
        Ok(page) => ScrapeResult::from(page),
        Err(err) => ScrapeResult::failure(url, &err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_url_accepts_absolute_http_urls() {
        assert!(validate_url("https://example.com/blog-post").is_ok());
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("  https://example.com/padded  ").is_ok());
    }

    #[test]
    fn validate_url_rejects_malformed_input() {
        for input in ["not-a-url", "", "/relative/path", "example.com"] {
            let err = validate_url(input).unwrap_err();
            assert!(err.to_string().contains("Invalid URL"), "input: {input:?}");
        }
    }

    #[test]
    fn validate_url_rejects_missing_host() {
        assert!(validate_url("file:///etc/passwd").is_err());
        assert!(validate_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn title_prefers_title_element_over_h1() {
        let document = Html::parse_document(
            "<html><head><title> Page Title </title></head>\
             <body><h1>Heading</h1></body></html>",
        );
        assert_eq!(resolve_title(&document), "Page Title");
    }

    #[test]
    fn title_falls_back_to_first_h1() {
        let document = Html::parse_document(
            "<html><body><h1>  From Heading  </h1><h1>Second</h1></body></html>",
        );
        assert_eq!(resolve_title(&document), "From Heading");
    }

    #[test]
    fn title_sentinel_when_neither_exists() {
        let document = Html::parse_document("<html><body><p>text</p></body></html>");
        assert_eq!(resolve_title(&document), NO_TITLE);
    }

    #[test]
    fn present_but_empty_title_does_not_fall_through() {
        let document = Html::parse_document(
            "<html><head><title></title></head><body><h1>Heading</h1></body></html>",
        );
        assert_eq!(resolve_title(&document), "");
    }

    #[test]
    fn strip_noise_removes_all_noise_kinds() {
        let mut document = Html::parse_document(
            "<html><body>\
             <nav>navigation</nav><header>masthead</header>\
             <p>keep this</p>\
             <script>var x = 1;</script><style>p {}</style>\
             <aside>related</aside><footer>copyright</footer>\
             </body></html>",
        );
        strip_noise(&mut document);
        // No container query matches, so this reads the cleaned body.
        let text = select_content(&document);
        assert!(text.contains("keep this"));
        for noise in ["navigation", "masthead", "var x", "p {}", "related", "copyright"] {
            assert!(!text.contains(noise), "noise survived: {noise}");
        }
    }

    #[test]
    fn container_priority_first_match_wins() {
        let document = Html::parse_document(
            "<html><body>\
             <div class=\"content\">secondary</div>\
             <article>primary article text</article>\
             </body></html>",
        );
        assert!(select_content(&document).contains("primary article text"));
    }

    #[test]
    fn class_selectors_match_before_later_entries() {
        let document = Html::parse_document(
            "<html><body>\
             <main>main element</main>\
             <div class=\"post-content\">post body text</div>\
             </body></html>",
        );
        // .post-content outranks main in the priority list
        let text = select_content(&document);
        assert!(text.contains("post body text"));
        assert!(!text.contains("main element"));
    }

    #[test]
    fn falls_back_to_body_when_no_container_matches() {
        let document = Html::parse_document(
            "<html><body><p>plain paragraph soup</p></body></html>",
        );
        assert!(select_content(&document).contains("plain paragraph soup"));
    }

    #[test]
    fn normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_text("one\n\n  two\t three   "), "one two three");
    }

    #[test]
    fn normalize_strips_disallowed_characters() {
        assert_eq!(
            normalize_text("Costs $40 (roughly) * cheap, right?"),
            "Costs 40 (roughly)  cheap, right?"
        );
    }

    #[test]
    fn normalize_keeps_sentence_punctuation() {
        let text = "Wait... really?! Yes; no: maybe - (sort of).";
        assert_eq!(normalize_text(text), text);
    }
}

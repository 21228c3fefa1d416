//! End-to-end pipeline tests against a local mock HTTP server.

use blog_summarizer::summarizer::DEFAULT_TARGET_LENGTH;
use blog_summarizer::{extract, summarize};

const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Deterministic Pipelines</title>
<style>body { color: red; }</style>
</head>
<body>
<header><h1>Site Masthead</h1></header>
<nav><a href="/">Home</a> <a href="/about">About</a></nav>
<article>
<p>Deterministic pipelines produce the same output for the same input every single time.</p>
<p>Careful ordering rules and stable sorting keep keyword ranking reproducible across runs.</p>
<p>Summaries assembled from templates stay predictable and cheap compared with model inference.</p>
</article>
<aside>Related links</aside>
<footer>Copyright notice</footer>
<script>console.log("tracking");</script>
</body>
</html>"#;

async fn serve_article(server: &mut mockito::Server) -> (mockito::Mock, String) {
    let mock = server
        .mock("GET", "/post")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(ARTICLE_HTML)
        .create_async()
        .await;
    (mock, format!("{}/post", server.url()))
}

#[tokio::test]
async fn extract_returns_title_and_clean_article_text() {
    let mut server = mockito::Server::new_async().await;
    let (_mock, url) = serve_article(&mut server).await;

    let result = extract(&url).await;
    assert!(result.success, "error: {:?}", result.error);
    assert_eq!(result.title.as_deref(), Some("Deterministic Pipelines"));

    let content = result.content.unwrap();
    assert!(content.contains("Deterministic pipelines produce the same output"));
    for noise in ["Masthead", "Home", "Related links", "Copyright", "tracking", "color"] {
        assert!(!content.contains(noise), "noise survived: {noise}");
    }

    assert_eq!(result.word_count, Some(content.split_whitespace().count()));
    assert_eq!(result.char_count, Some(content.chars().count()));
}

#[tokio::test]
async fn extract_is_deterministic_across_calls() {
    let mut server = mockito::Server::new_async().await;
    let (_mock, url) = serve_article(&mut server).await;

    let first = extract(&url).await;
    let second = extract(&url).await;
    assert!(first.success && second.success);
    assert_eq!(first.title, second.title);
    assert_eq!(first.content, second.content);
}

#[tokio::test]
async fn extract_surfaces_http_status_failures() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("gone")
        .create_async()
        .await;

    let result = extract(&format!("{}/missing", server.url())).await;
    assert!(!result.success);
    assert!(result.title.is_none());
    assert!(result.content.is_none());
    assert!(result.error.unwrap().contains("404"));
}

#[tokio::test]
async fn extract_rejects_invalid_urls_before_any_request() {
    let result = extract("not-a-url").await;
    assert!(!result.success);
    assert!(result.error.unwrap().contains("Invalid URL"));
}

#[tokio::test]
async fn extract_fails_cleanly_on_connection_refused() {
    // Port 1 is reserved and nothing listens on it.
    let result = extract("http://127.0.0.1:1/post").await;
    assert!(!result.success);
    assert!(result.error.unwrap().contains("fetch"));
}

#[tokio::test]
async fn scraped_page_feeds_straight_into_the_summarizer() {
    let mut server = mockito::Server::new_async().await;
    let (_mock, url) = serve_article(&mut server).await;

    let scraped = extract(&url).await;
    assert!(scraped.success);

    let summary = summarize(
        scraped.title.as_deref().unwrap(),
        scraped.content.as_deref().unwrap(),
        DEFAULT_TARGET_LENGTH,
    );
    assert!(summary.success);
    assert!(
        summary
            .summary
            .unwrap()
            .starts_with("This article titled 'Deterministic Pipelines' discusses")
    );
    let ratio = summary.compression_ratio.unwrap();
    assert!(ratio > 0.0 && ratio <= 100.0);
}

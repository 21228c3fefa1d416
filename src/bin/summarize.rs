//! Command-line front end: scrape one URL and print its summary report.

use std::env;
use std::process;

use blog_summarizer::summarizer::DEFAULT_TARGET_LENGTH;
use blog_summarizer::{extract, summarize};

#[tokio::main]
async fn main() {
    let mut args = env::args().skip(1);
    let url = match (args.next(), args.next()) {
        (Some(url), None) => url,
        _ => {
            eprintln!("Usage: summarize <blog_url>");
            eprintln!("Example: summarize https://example.com/blog-post");
            process::exit(1);
        }
    };

    println!("Scraping content from: {}", url);

    let scraped = extract(&url).await;
    if !scraped.success {
        eprintln!("Error: {}", scraped.error.unwrap_or_default());
        process::exit(1);
    }

    let title = scraped.title.unwrap_or_default();
    let content = scraped.content.unwrap_or_default();

    println!("Successfully scraped content");
    println!("Title: {}", title);
    println!("Word count: {}", scraped.word_count.unwrap_or_default());

    println!("Generating summary...");
    let result = summarize(&title, &content, DEFAULT_TARGET_LENGTH);
    if !result.success {
        eprintln!("Summarization error: {}", result.error.unwrap_or_default());
        process::exit(1);
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("BLOG SUMMARY");
    println!("{}", "=".repeat(60));
    println!();
    println!("Title: {}", title);
    println!("URL: {}", url);
    println!("Original length: {} words", result.original_length.unwrap_or_default());
    println!("Summary length: {} words", result.summary_length.unwrap_or_default());
    println!("Compression ratio: {}%", result.compression_ratio.unwrap_or_default());

    println!();
    println!("Summary:");
    println!("{}", "-".repeat(40));
    println!("{}", result.summary.unwrap_or_default());

    println!();
    println!("Top Keywords:");
    println!("{}", "-".repeat(40));
    println!("{}", result.keywords.unwrap_or_default().join(", "));

    println!();
    println!("Key Points:");
    println!("{}", "-".repeat(40));
    for (index, point) in result.key_points.unwrap_or_default().iter().enumerate() {
        println!("{}. {}", index + 1, point);
    }

    println!();
    println!("{}", "=".repeat(60));
}

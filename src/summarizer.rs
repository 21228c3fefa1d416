//! Deterministic template-based summarization.
//!
//! No language model is involved: keywords come from stopword-filtered
//! frequency ranking, key points from a positional and length heuristic,
//! and the summary string from a fixed template over both.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::scraper::NO_TITLE;

/// Default word cap for composed summaries.
pub const DEFAULT_TARGET_LENGTH: usize = 150;

/// Keywords carried in the result record.
const KEYWORD_LIMIT: usize = 10;

/// Keywords woven into the summary template.
const TOPIC_LIMIT: usize = 3;

/// Key sentences carried in the result record.
const KEY_POINT_LIMIT: usize = 5;

/// Word cap on the key point quoted inside the summary.
const INSIGHT_WORD_LIMIT: usize = 15;

/// Minimum token length considered a keyword candidate.
const MIN_KEYWORD_LEN: usize = 3;

/// Sentences at or below this trimmed length are discarded.
const MIN_SENTENCE_CHARS: usize = 10;

/// Common English function words excluded from keyword ranking.
const STOP_WORDS: [&str; 38] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "is", "are", "was", "were", "be", "been", "have",
    "has", "had", "do", "does", "did", "will", "would", "could", "should",
    "this", "that", "these", "those", "it", "they", "them", "their",
];

/// Successful summarization output, before being wrapped into a record.
#[derive(Debug, Clone)]
pub struct Summary {
    pub summary: String,
    pub keywords: Vec<String>,
    pub key_points: Vec<String>,
    pub original_length: usize,
    pub summary_length: usize,
    pub compression_ratio: f64,
}

/// Outcome record of one summarization attempt.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SummaryResult {
    fn failure(err: &AppError) -> Self {
        SummaryResult {
            success: false,
            summary: None,
            keywords: None,
            key_points: None,
            original_length: None,
            summary_length: None,
            compression_ratio: None,
            error: Some(err.to_string()),
        }
    }
}

impl From<Summary> for SummaryResult {
    fn from(summary: Summary) -> Self {
        SummaryResult {
            success: true,
            summary: Some(summary.summary),
            keywords: Some(summary.keywords),
            key_points: Some(summary.key_points),
            original_length: Some(summary.original_length),
            summary_length: Some(summary.summary_length),
            compression_ratio: Some(summary.compression_ratio),
            error: None,
        }
    }
}

/// Rank content words by frequency, most frequent first.
///
/// Tokens are maximal alphabetic runs of at least three characters,
/// compared case-insensitively; stopwords are dropped. std's `sort_by`
/// is stable, so equal-frequency tokens keep first-occurrence order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut freq: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<&str> = Vec::new();

    for token in lowered.split(|c: char| !c.is_alphabetic()) {
        if token.chars().count() < MIN_KEYWORD_LEN || STOP_WORDS.contains(&token) {
            continue;
        }
        let count = freq.entry(token).or_insert(0);
        if *count == 0 {
            ranked.push(token);
        }
        *count += 1;
    }

    ranked.sort_by(|a, b| freq[b].cmp(&freq[a]));
    ranked.into_iter().map(String::from).collect()
}

/// Split text into candidate sentences and rank them by an early-position
/// and preferred-length heuristic, returning the top few.
///
/// Sentences whose trimmed length is at most ten characters are not
/// candidates at all. The sort is stable, so equal scores keep the
/// original sentence order.
pub fn identify_key_points(text: &str) -> Vec<String> {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
        .collect();

    let total = sentences.len();
    let mut scored: Vec<(&str, u32)> = sentences
        .into_iter()
        .enumerate()
        .map(|(index, sentence)| {
            let mut score = 0;
            // Earlier sentences are more important
            if (index as f64) < total as f64 * 0.3 {
                score += 2;
            }
            // Medium length sentences are preferred
            let word_count = sentence.split_whitespace().count();
            if (10..=30).contains(&word_count) {
                score += 1;
            }
            (sentence, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(KEY_POINT_LIMIT)
        .map(|(sentence, _)| sentence.to_string())
        .collect()
}

/// Assemble the templated summary string and enforce the word cap.
fn compose_summary(
    title: &str,
    keywords: &[String],
    key_points: &[String],
    target_length: usize,
) -> String {
    let mut summary = String::new();

    if !title.is_empty() && title != NO_TITLE {
        summary.push_str(&format!("This article titled '{}' discusses", title));
    } else {
        summary.push_str("This content covers");
    }

    if !keywords.is_empty() {
        let topics = keywords
            .iter()
            .take(TOPIC_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        summary.push_str(&format!(" {}", topics));
    }

    if let Some(best_point) = key_points.first() {
        let words: Vec<&str> = best_point.split_whitespace().collect();
        let insight = if words.len() > INSIGHT_WORD_LIMIT {
            format!("{}...", words[..INSIGHT_WORD_LIMIT].join(" "))
        } else {
            best_point.clone()
        };
        summary.push_str(&format!(". The main insight is: {}", insight));
    }

    let words: Vec<&str> = summary.split_whitespace().collect();
    if words.len() > target_length {
        summary = format!("{}...", words[..target_length].join(" "));
    }

    summary
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Run the scoring pipeline over already-normalized content.
///
/// Content with zero words is rejected here rather than producing an
/// undefined compression ratio.
pub fn build_summary(title: &str, content: &str, target_length: usize) -> Result<Summary> {
    let original_length = content.split_whitespace().count();
    if original_length == 0 {
        return Err(AppError::EmptyContent);
    }

    let keywords = extract_keywords(content);
    let key_points = identify_key_points(content);
    let summary = compose_summary(title, &keywords, &key_points, target_length);

    let summary_length = summary.split_whitespace().count();
    let compression_ratio =
        round_two_decimals(summary_length as f64 / original_length as f64 * 100.0);

    Ok(Summary {
        summary,
        keywords: keywords.into_iter().take(KEYWORD_LIMIT).collect(),
        key_points,
        original_length,
        summary_length,
        compression_ratio,
    })
}

/// Public summarization operation: every internal failure is folded into
/// a tagged record instead of escaping to the caller.
pub fn summarize(title: &str, content: &str, target_length: usize) -> SummaryResult {
    match build_summary(title, content, target_length) {
        Ok(summary) => SummaryResult::from(summary),
        Err(err) => SummaryResult::failure(&err),
    }
}

use axum::{
    Router,
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::AppState;
use crate::api::models::{Analysis, ContentStats, SummarizeRequest, SummarizeResponse};
use crate::api::response;
use crate::error::Result;
use crate::{scraper, summarizer};

/// Outer guard on the whole request, well above the fetch timeout.
const HANDLER_TIMEOUT: Duration = Duration::from_secs(60);

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/summarize", post(summarize_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> impl IntoResponse {
    if req.url.trim().is_empty() {
        return response::error(StatusCode::BAD_REQUEST, "URL is required".to_string());
    }

    info!(url = %req.url, "processing summarize request");
    let started = Instant::now();

    let result = tokio::time::timeout(
        HANDLER_TIMEOUT,
        process_summarize_request(&state, &req),
    )
    .await;

    match result {
        Ok(Ok(payload)) => {
            info!(url = %req.url, elapsed = ?started.elapsed(), "request completed");
            response::success(payload)
        }
        Ok(Err(err)) => {
            warn!(url = %req.url, error = %err, "request failed");
            response::error(err.status_code(), err.to_string())
        }
        Err(_) => {
            warn!(url = %req.url, elapsed = ?started.elapsed(), "request timed out");
            response::error(
                StatusCode::REQUEST_TIMEOUT,
                "Request processing timed out".to_string(),
            )
        }
    }
}

async fn process_summarize_request(
    state: &AppState,
    req: &SummarizeRequest,
) -> Result<SummarizeResponse> {
    let page = scraper::scrape_page_with(&state.http, &req.url).await?;

    let target_length = req
        .target_length
        .unwrap_or(state.config.summary_target_length);
    let summary = summarizer::build_summary(&page.title, &page.content, target_length)?;

    Ok(SummarizeResponse {
        success: true,
        url: page.url,
        title: page.title,
        content_stats: ContentStats {
            word_count: page.word_count,
            char_count: page.char_count,
        },
        summary: summary.summary,
        keywords: summary.keywords,
        key_points: summary.key_points,
        analysis: Analysis {
            original_length: summary.original_length,
            summary_length: summary.summary_length,
            compression_ratio: summary.compression_ratio,
        },
    })
}

use axum::http::StatusCode;

/// Error type for the scrape/summarize pipeline and the service around it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The input string is not an absolute URL with a host.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// DNS, connection or timeout failure while fetching the page.
    #[error("Failed to fetch URL: {0}")]
    Fetch(String),

    /// The server answered with a non-success status.
    #[error("Request failed with HTTP status {0}")]
    HttpStatus(u16),

    /// Unexpected failure while parsing or selecting content.
    #[error("Content extraction failed: {0}")]
    Extraction(String),

    /// Normalized content contains no words, so there is nothing to
    /// summarize and no compression ratio to compute.
    #[error("Cannot summarize empty content")]
    EmptyContent,

    /// Unexpected failure while scoring or composing the summary.
    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status the API layer reports for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            AppError::Fetch(_) => StatusCode::BAD_REQUEST,
            AppError::HttpStatus(_) => StatusCode::BAD_GATEWAY,
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EmptyContent => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Summarization(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // error_for_status failures carry the offending status; everything
        // else is a transport-level problem.
        match err.status() {
            Some(status) => AppError::HttpStatus(status.as_u16()),
            None => AppError::Fetch(err.to_string()),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

use std::num::ParseIntError;

/// All errors that can occur while acquiring season data or editing predictions.
#[derive(thiserror::Error, Debug)]
pub enum ForecastError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape the provider documents.
    #[error("failed to decode json from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    /// Failed to parse an integer from a provider field.
    #[error("failed to parse integer: {0}")]
    IntParse(#[from] ParseIntError),

    /// Failed to parse a date from a provider field.
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// A prediction was written outside `1..=MAX_PREDICTED_POSITION`.
    #[error("predicted position {position} is out of range")]
    InvalidPosition { position: u8 },

    /// Imported prediction state was not well-formed.
    #[error("malformed prediction state: {0}")]
    StateFormat(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForecastError>;

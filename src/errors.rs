/*!
 * Error types for the cliptrans application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation provider.
///
/// These never escape an adapter's `find` call; the adapter converts them
/// into a failed `TranslateResult` carrying the error message as diagnostic.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// The adapter's bounded timeout elapsed before a response arrived
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

/// Errors that can occur during source-language detection
#[derive(Error, Debug)]
pub enum DetectionError {
    /// The detection request itself failed
    #[error("Detection request failed: {0}")]
    RequestFailed(String),

    /// The detector answered but no usable language code was found
    #[error("No language code in detector response: {0}")]
    NoLanguage(String),
}

/// Errors surfaced by a pipeline run.
///
/// Caught at the dispatcher boundary and converted into a single "Error"
/// notification; they never terminate the process.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Source-language detection failed, aborting the current run
    #[error("Language detection failed: {0}")]
    Detection(#[from] DetectionError),

    /// Any other failure inside the pipeline driver
    #[error("Pipeline error: {0}")]
    Unknown(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a config or file operation
    #[error("Config error: {0}")]
    Config(String),

    /// Error from a pipeline run
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}

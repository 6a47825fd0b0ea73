//! Error types for dupesense.
//!
//! Analysis itself never fails: segmentation, scoring, grouping, and
//! resolution are total over any input string. Only the rewrite service
//! boundary produces these errors; configuration builders report
//! [`ConfigError`](crate::ConfigError) directly.

/// Boxed error returned by a [`RewriteService`](crate::RewriteService).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while fixing a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The rewrite service call failed.
    #[error("rewrite service failed: {0}")]
    Collaborator(#[source] BoxError),

    /// The rewrite service answered, but not with exactly one `---` delimiter.
    #[error("malformed rewrite response: expected exactly one `---` delimiter, found {delimiters}")]
    MalformedResponse {
        /// How many delimiters the response actually contained.
        delimiters: usize,
    },
}

/// Result type for dupesense operations.
pub type Result<T> = std::result::Result<T, Error>;

//! The rewrite service boundary.
//!
//! After duplicates are erased, the reduced text goes to an external
//! rewriting service (typically a language model) together with the
//! original text and the legend. The service answers with one string that
//! must hold exactly one `---` delimiter:
//!
//! ```text
//! <fixed text>
//! ---
//! <change log>
//! ```
//!
//! Nothing else about the answer is assumed. Zero or several delimiters is
//! a [`Error::MalformedResponse`], distinct from the call itself failing
//! ([`Error::Collaborator`]). There is no retry and no timeout here;
//! callers that want either wrap their service.

use async_trait::async_trait;

use crate::{BoxError, Error, LegendEntry, Resolution, Result};

/// Delimiter between fixed text and change log in a rewrite response.
pub const DELIMITER: &str = "---";

/// What is sent to the rewrite service.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewriteRequest {
    /// The text with near-duplicates erased.
    pub reduced_text: String,
    /// The untouched reconstruction of the input.
    pub original_text: String,
    /// Similarity evidence, one entry per notable pair.
    pub legend: Vec<LegendEntry>,
}

impl RewriteRequest {
    /// Render an instruction prompt for a text-in, text-out model.
    ///
    /// ```rust
    /// use dupesense::{Color, LegendEntry, RewriteRequest};
    ///
    /// let request = RewriteRequest {
    ///     reduced_text: "The cat sat. A dog ran.".into(),
    ///     original_text: "The cat sat. The cat sat. A dog ran.".into(),
    ///     legend: vec![LegendEntry { color: Color::FALLBACK, indices: (0, 1), percentage: 100 }],
    /// };
    /// let prompt = request.prompt();
    /// assert!(prompt.contains("Sentences 1 & 2: 100% similarity"));
    /// assert!(prompt.contains("---"));
    /// ```
    #[must_use]
    pub fn prompt(&self) -> String {
        let mut prompt = String::from(
            "Rewrite the text below so it no longer repeats itself. \
             Near-duplicate sentences have already been removed; smooth over \
             what remains without changing its meaning.\n\n",
        );
        if !self.legend.is_empty() {
            prompt.push_str("Similar sentences in the original text:\n");
            for entry in &self.legend {
                prompt.push_str("- ");
                prompt.push_str(&entry.to_string());
                prompt.push('\n');
            }
            prompt.push('\n');
        }
        prompt.push_str("Original text:\n");
        prompt.push_str(&self.original_text);
        prompt.push_str("\n\nText to rewrite:\n");
        prompt.push_str(&self.reduced_text);
        prompt.push_str(
            "\n\nAnswer with the rewritten text, then a line containing only \
             ---, then a short list of the changes you made. \
             Do not use --- anywhere else.",
        );
        prompt
    }
}

impl From<&Resolution> for RewriteRequest {
    fn from(resolution: &Resolution) -> Self {
        Self {
            reduced_text: resolution.reduced_text.clone(),
            original_text: resolution.original_text.clone(),
            legend: resolution.legend.clone(),
        }
    }
}

/// A parsed rewrite response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewriteOutcome {
    /// Text before the delimiter.
    pub fixed_text: String,
    /// Text after the delimiter.
    pub change_log: String,
    /// The original text the rewrite started from.
    pub original_text: String,
}

/// An external service that rewrites reduced text.
///
/// Implementations perform the network call; errors they return are
/// surfaced as [`Error::Collaborator`].
#[async_trait]
pub trait RewriteService: Send + Sync {
    /// Rewrite the request, answering `fixed --- changes`.
    async fn rewrite(&self, request: &RewriteRequest) -> std::result::Result<String, BoxError>;
}

/// Split a response into `(fixed_text, change_log)`.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] unless `response` contains exactly
/// one [`DELIMITER`].
///
/// ```rust
/// use dupesense::{parse_response, Error};
///
/// let (fixed, log) = parse_response("Clean text.\n---\n- removed one repeat").unwrap();
/// assert_eq!(fixed, "Clean text.\n");
/// assert_eq!(log, "\n- removed one repeat");
///
/// assert!(matches!(parse_response("no delimiter"), Err(Error::MalformedResponse { delimiters: 0 })));
/// ```
pub fn parse_response(response: &str) -> Result<(&str, &str)> {
    let delimiters = response.matches(DELIMITER).count();
    if delimiters != 1 {
        tracing::warn!(delimiters, "rewrite response is malformed");
        return Err(Error::MalformedResponse { delimiters });
    }
    response
        .split_once(DELIMITER)
        .ok_or(Error::MalformedResponse { delimiters: 0 })
}

/// Send `resolution` to `service` once and parse the answer.
///
/// # Errors
///
/// [`Error::Collaborator`] when the service fails, [`Error::MalformedResponse`]
/// when its answer does not split cleanly.
pub async fn request_rewrite<S>(resolution: &Resolution, service: &S) -> Result<RewriteOutcome>
where
    S: RewriteService + ?Sized,
{
    let request = RewriteRequest::from(resolution);
    tracing::debug!(
        reduced_len = request.reduced_text.len(),
        legend = request.legend.len(),
        "requesting rewrite"
    );
    let response = service
        .rewrite(&request)
        .await
        .map_err(Error::Collaborator)?;
    let (fixed, changes) = parse_response(&response)?;
    Ok(RewriteOutcome {
        fixed_text: fixed.to_string(),
        change_log: changes.to_string(),
        original_text: request.original_text,
    })
}

//! Comparison keys for scoring.
//!
//! The key only feeds the similarity metric. Display and reconstruction
//! always use the verbatim sentence.

use crate::segment::TERMINATORS;

/// Lower-case `sentence` and strip one trailing terminator.
///
/// Internal punctuation is left alone, and only a single terminator is
/// removed, so `"Really?!"` becomes `"really?"`.
///
/// ```rust
/// use dupesense::normalize;
///
/// assert_eq!(normalize("The Cat sat."), "the cat sat");
/// assert_eq!(normalize("Wait, what?!"), "wait, what?");
/// assert_eq!(normalize("no terminator"), "no terminator");
/// ```
#[must_use]
pub fn normalize(sentence: &str) -> String {
    let lowered = sentence.to_lowercase();
    match lowered.strip_suffix(TERMINATORS) {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}

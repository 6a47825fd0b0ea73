//! Best-match search across all sentence pairs.
//!
//! Every sentence independently picks its single most similar counterpart.
//! The relation is not symmetric:
//!
//! ```text
//! A ──0.7──▶ B ──0.8──▶ C
//!            ▲          │
//!            └───0.8────┘
//! ```
//!
//! A's best match is B, but B prefers C. Grouping keeps both pairs.
//!
//! ## Cost
//!
//! O(n²) metric calls in sentence count. Because the metric is symmetric
//! each unordered pair is scored once and offered to both sides, so the
//! exact count is n(n-1)/2. There is no incremental re-scoring: every
//! analysis starts over.

use crate::normalize::normalize;
use crate::SimilarityMetric;

/// A sentence and its best match.
///
/// `text` is the verbatim body, or empty once soft-deleted.
/// `similar_to` is `None` only when there is no other sentence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Sentence {
    /// The sentence body.
    pub text: String,
    /// Score of the best match, in `[0, 1]`.
    pub similarity: f64,
    /// Index of the best match.
    pub similar_to: Option<usize>,
}

impl Sentence {
    /// A sentence with no match recorded.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            similarity: 0.0,
            similar_to: None,
        }
    }

    /// A sentence with a known best match.
    #[must_use]
    pub fn with_match(text: impl Into<String>, similarity: f64, similar_to: usize) -> Self {
        Self {
            text: text.into(),
            similarity,
            similar_to: Some(similar_to),
        }
    }

    /// Whether the sentence was soft-deleted.
    #[must_use]
    pub fn is_erased(&self) -> bool {
        self.text.is_empty()
    }
}

/// Find each sentence's best match under `metric`.
///
/// Ties go to the lowest index. With a single sentence the result is
/// `(0, None)`; otherwise every sentence gets `Some(j)`, even when every
/// score is zero.
///
/// ```rust
/// use dupesense::{best_matches, DiceSimilarity};
///
/// let texts = ["The cat sat.", "The cat sat.", "A dog ran."].map(String::from);
/// let sentences = best_matches(&texts, &DiceSimilarity);
///
/// assert_eq!(sentences[0].similar_to, Some(1));
/// assert_eq!(sentences[1].similar_to, Some(0));
/// assert_eq!(sentences[0].similarity, 1.0);
/// ```
pub fn best_matches<M>(texts: &[String], metric: &M) -> Vec<Sentence>
where
    M: SimilarityMetric + ?Sized,
{
    let keys: Vec<String> = texts.iter().map(|t| normalize(t)).collect();
    let mut best: Vec<Option<(f64, usize)>> = vec![None; texts.len()];

    // Row i offers its score to j (> i) and j offers the same score back.
    // For any fixed sentence, candidates therefore arrive in ascending index
    // order, which is what makes "first wins" on ties hold.
    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            let score = metric.similarity(&keys[i], &keys[j]);
            offer(&mut best[i], score, j);
            offer(&mut best[j], score, i);
        }
    }

    texts
        .iter()
        .zip(best)
        .map(|(text, found)| match found {
            Some((score, j)) => Sentence::with_match(text.clone(), score, j),
            None => Sentence::new(text.clone()),
        })
        .collect()
}

fn offer(slot: &mut Option<(f64, usize)>, score: f64, candidate: usize) {
    match slot {
        Some((best, _)) if score <= *best => {}
        _ => *slot = Some((score, candidate)),
    }
}

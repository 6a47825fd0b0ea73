//! Grouping of notable sentence pairs.
//!
//! Each sentence that clears the notable threshold reports one pair: itself
//! and its best match. Two sentences that pick each other report the same
//! pair twice, so pairs are canonicalized to `(min, max)` and kept once, in
//! the order they were first reported.

use crate::Sentence;

/// An unordered pair of sentence indices, stored as `(min, max)`.
///
/// ```rust
/// use dupesense::PairKey;
///
/// assert_eq!(PairKey::new(4, 1), PairKey::new(1, 4));
/// assert_eq!(PairKey::new(4, 1).indices(), (1, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairKey {
    low: usize,
    high: usize,
}

impl PairKey {
    /// Canonicalize `a` and `b` into a key.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// The smaller index.
    #[must_use]
    pub const fn low(&self) -> usize {
        self.low
    }

    /// The larger index.
    #[must_use]
    pub const fn high(&self) -> usize {
        self.high
    }

    /// Both indices as `(min, max)`.
    #[must_use]
    pub const fn indices(&self) -> (usize, usize) {
        (self.low, self.high)
    }

    /// Whether `index` is one of the two members.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.low == index || self.high == index
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// A pair that cleared the notable threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotablePair {
    /// The canonical pair.
    pub key: PairKey,
    /// The sentence whose best match produced this pair first.
    pub reporter: usize,
    /// The reporter's best-match score.
    pub similarity: f64,
}

impl NotablePair {
    /// `round(similarity * 100)`, clamped to `0..=100`.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        (self.similarity * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Collect the unique pairs whose score is strictly above `threshold`.
///
/// Sentences are visited in index order; the first report of a pair wins
/// and later reports of the same pair are skipped. Soft-deleted sentences
/// and sentences without a match never report.
///
/// ```rust
/// use dupesense::{notable_pairs, PairKey, Sentence};
///
/// let sentences = [
///     Sentence::with_match("A.", 0.7, 1),
///     Sentence::with_match("B.", 0.8, 2),
///     Sentence::with_match("C.", 0.8, 1),
/// ];
/// let pairs = notable_pairs(&sentences, 0.5);
///
/// let keys: Vec<PairKey> = pairs.iter().map(|p| p.key).collect();
/// assert_eq!(keys, [PairKey::new(0, 1), PairKey::new(1, 2)]);
/// assert_eq!(pairs[0].percentage(), 70);
/// assert_eq!(pairs[1].percentage(), 80);
/// ```
#[must_use]
pub fn notable_pairs(sentences: &[Sentence], threshold: f64) -> Vec<NotablePair> {
    let mut pairs: Vec<NotablePair> = Vec::new();

    for (idx, sentence) in sentences.iter().enumerate() {
        let Some(target) = sentence.similar_to else {
            continue;
        };
        if sentence.similarity <= threshold || target == idx {
            continue;
        }
        let key = PairKey::new(idx, target);
        // Pair lists are short; a linear scan keeps first-seen order for free.
        if pairs.iter().any(|p| p.key == key) {
            continue;
        }
        pairs.push(NotablePair {
            key,
            reporter: idx,
            similarity: sentence.similarity,
        });
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutual_pair_recorded_once() {
        let sentences = [
            Sentence::with_match("a", 1.0, 1),
            Sentence::with_match("a", 1.0, 0),
            Sentence::with_match("z", 0.0, 0),
        ];
        let pairs = notable_pairs(&sentences, 0.5);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].key, PairKey::new(0, 1));
        assert_eq!(pairs[0].reporter, 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let sentences = [
            Sentence::with_match("a", 0.5, 1),
            Sentence::with_match("b", 0.5, 0),
        ];
        assert!(notable_pairs(&sentences, 0.5).is_empty());
    }

    #[test]
    fn test_first_report_sets_percentage() {
        // Sentence 0 reports (0,2) at 0.61 before sentence 2 reports it at 0.64.
        let sentences = [
            Sentence::with_match("a", 0.61, 2),
            Sentence::with_match("b", 0.1, 0),
            Sentence::with_match("c", 0.64, 0),
        ];
        let pairs = notable_pairs(&sentences, 0.5);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].percentage(), 61);
    }

    #[test]
    fn test_first_seen_order() {
        let sentences = [
            Sentence::with_match("a", 0.2, 1),
            Sentence::with_match("b", 0.9, 3),
            Sentence::with_match("c", 0.7, 0),
            Sentence::with_match("d", 0.9, 1),
        ];
        let keys: Vec<_> = notable_pairs(&sentences, 0.5).iter().map(|p| p.key).collect();
        assert_eq!(keys, [PairKey::new(1, 3), PairKey::new(0, 2)]);
    }

    #[test]
    fn test_unmatched_sentences_skipped() {
        let sentences = [Sentence::new("alone")];
        assert!(notable_pairs(&sentences, 0.0).is_empty());
    }

    #[test]
    fn test_percentage_rounding() {
        let pair = NotablePair {
            key: PairKey::new(0, 1),
            reporter: 0,
            similarity: 0.666,
        };
        assert_eq!(pair.percentage(), 67);
    }
}

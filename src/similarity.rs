//! Bigram Dice similarity.
//!
//! ## The Metric
//!
//! Both strings are stripped of whitespace and cut into overlapping pairs
//! of grapheme clusters. The score is the Dice coefficient of the two
//! bigram multisets:
//!
//! ```text
//! a = "night"  bigrams: ni ig gh ht
//! b = "nacht"  bigrams: na ac ch ht
//!
//! dice = 2 * |{ht}| / (4 + 4) = 0.25
//! ```
//!
//! Identical strings score 1.0 and strings sharing no bigram score 0.0.
//! Empty input scores 0.0 on either side, as does any input too short to
//! form a bigram unless it equals the other side exactly.
//!
//! Whitespace is ignored entirely, so `"the cat"` and `"thecat"` are
//! identical. Case is not folded here; callers pass normalized keys.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::SimilarityMetric;

/// Dice coefficient over grapheme bigrams.
///
/// ```rust
/// use dupesense::{DiceSimilarity, SimilarityMetric};
///
/// let dice = DiceSimilarity;
/// assert_eq!(dice.similarity("the cat sat", "the cat sat"), 1.0);
/// assert_eq!(dice.similarity("the cat sat", "a dog ran"), 0.0);
/// assert_eq!(dice.similarity("", ""), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceSimilarity;

impl SimilarityMetric for DiceSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        dice_coefficient(a, b)
    }
}

/// Compute the bigram Dice coefficient of `a` and `b`.
#[must_use]
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    let a = squash(a);
    let b = squash(b);

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a = bigrams(&a);
    let b = bigrams(&b);
    if a.total == 0 || b.total == 0 {
        return 0.0;
    }

    // Iterate the smaller map; the result is the same either way.
    let (small, large) = if a.counts.len() <= b.counts.len() {
        (&a, &b)
    } else {
        (&b, &a)
    };
    let shared: usize = small
        .counts
        .iter()
        .map(|(gram, &n)| n.min(large.counts.get(gram).copied().unwrap_or(0)))
        .sum();

    (2 * shared) as f64 / (a.total + b.total) as f64
}

fn squash(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

struct Bigrams<'a> {
    counts: HashMap<(&'a str, &'a str), usize>,
    total: usize,
}

fn bigrams(s: &str) -> Bigrams<'_> {
    let graphemes: Vec<&str> = s.graphemes(true).collect();
    let mut counts = HashMap::new();
    for pair in graphemes.windows(2) {
        *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
    }
    Bigrams {
        counts,
        total: graphemes.len().saturating_sub(1),
    }
}

//! # dupesense
//!
//! Sentence-level near-duplicate detection for prose.
//!
//! ## The Problem
//!
//! Drafts repeat themselves. The same point gets made twice, three
//! paragraphs apart, in nearly the same words:
//!
//! ```text
//! "The cat sat. The cat sat. A dog ran."
//!   ^^^^^^^^^^^^ ^^^^^^^^^^^^
//!   sentence 0   sentence 1   <- 100% similar
//! ```
//!
//! dupesense finds those repeats, groups them for display, and erases the
//! worst offenders before handing the text to a rewriting service.
//!
//! ## Pipeline
//!
//! 1. **Segment**: split into sentence bodies plus the exact whitespace
//!    after each, so the text can be rebuilt byte-for-byte.
//! 2. **Score**: compare every pair of sentences with a symmetric
//!    [`SimilarityMetric`] (bigram Dice by default) on normalized keys.
//! 3. **Match**: each sentence keeps its single best counterpart. This
//!    relation is *not* symmetric.
//! 4. **Group**: pairs scoring above the notable threshold (0.5) are
//!    deduplicated, colored, and listed in a legend.
//! 5. **Resolve**: a sentence scoring above the duplicate threshold (0.9)
//!    erases its match; the reduced text goes to a [`RewriteService`].
//!
//! ## Quick Start
//!
//! ```rust
//! use dupesense::Optimizer;
//!
//! let optimizer = Optimizer::new();
//! let analysis = optimizer.analyze("The cat sat. The cat sat. A dog ran.");
//!
//! for entry in &analysis.legend {
//!     println!("{entry}"); // Sentences 1 & 2: 100% similarity
//! }
//!
//! let resolution = optimizer.resolve(&analysis);
//! assert_eq!(resolution.reduced_text, "The cat sat. A dog ran.");
//! ```
//!
//! ## Performance
//!
//! | Stage | Cost |
//! |-------|------|
//! | Segment | O(n) in text length |
//! | Score + match | O(s²) metric calls in sentence count |
//! | Group + color | O(p²) in notable pairs |
//! | Resolve | O(s) |
//!
//! Every analysis recomputes everything; there is no incremental mode.

mod color;
mod config;
mod error;
mod grouping;
mod legend;
mod matching;
mod normalize;
mod pipeline;
mod resolve;
mod rewrite;
mod segment;
mod similarity;

pub use color::{assign_colors, Color, Highlight, HighlightMap, PairColors, Palette};
pub use config::{ConfigError, PaletteConfig, Thresholds, DEFAULT_DUPLICATE, DEFAULT_NOTABLE};
pub use error::{BoxError, Error, Result};
pub use grouping::{notable_pairs, NotablePair, PairKey};
pub use legend::{build_legend, LegendEntry};
pub use matching::{best_matches, Sentence};
pub use normalize::normalize;
pub use pipeline::{Analysis, Optimizer};
pub use resolve::{reduced_text, resolve_duplicates, Resolution};
pub use rewrite::{
    parse_response, request_rewrite, RewriteOutcome, RewriteRequest, RewriteService, DELIMITER,
};
pub use segment::{segment, Segmentation, TERMINATORS};
pub use similarity::{dice_coefficient, DiceSimilarity};

/// A symmetric similarity score between two strings.
///
/// Implementations must be pure and commutative, returning values in
/// `[0, 1]`: `similarity(a, b) == similarity(b, a)`.
///
/// ```rust
/// use dupesense::{Optimizer, SimilarityMetric};
///
/// /// Scores 1.0 for equal lengths, 0.0 otherwise.
/// struct SameLength;
///
/// impl SimilarityMetric for SameLength {
///     fn similarity(&self, a: &str, b: &str) -> f64 {
///         if a.len() == b.len() { 1.0 } else { 0.0 }
///     }
/// }
///
/// let analysis = Optimizer::with_metric(SameLength).analyze("Abc. Xyz. Hello.");
/// assert_eq!(analysis.legend.len(), 1);
/// ```
pub trait SimilarityMetric: Send + Sync {
    /// Score `a` against `b`.
    fn similarity(&self, a: &str, b: &str) -> f64;
}

impl<M: SimilarityMetric + ?Sized> SimilarityMetric for &M {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        (**self).similarity(a, b)
    }
}

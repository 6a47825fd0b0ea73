//! The end-to-end analysis pipeline.
//!
//! ```text
//! text ─▶ segment ─▶ best_matches ─▶ notable_pairs ─▶ assign_colors ─▶ legend
//!                         │                                           highlights
//!                         └──────────▶ resolve_duplicates ─▶ rewrite service
//! ```
//!
//! Every call to [`Optimizer::analyze`] starts from scratch and owns all of
//! its data. Scoring is O(n²) in sentence count.

use rand::Rng;

use crate::{
    assign_colors, best_matches, build_legend, notable_pairs, request_rewrite, segment,
    DiceSimilarity, HighlightMap, LegendEntry, NotablePair, PairKey, Palette, PaletteConfig,
    Resolution, Result, RewriteOutcome, RewriteService, Sentence, SimilarityMetric, Thresholds,
};

/// Result of analyzing one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Sentences with their best matches.
    pub sentences: Vec<Sentence>,
    /// Separators, index-aligned with `sentences`.
    pub separators: Vec<String>,
    /// Notable pairs in first-seen order.
    pub pairs: Vec<NotablePair>,
    /// One legend entry per notable pair.
    pub legend: Vec<LegendEntry>,
    /// Colors per highlighted sentence.
    pub highlights: HighlightMap,
}

impl Analysis {
    /// Whether no similar sentence pairs were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.legend.is_empty()
    }
}

/// Configured near-duplicate detector.
///
/// ## Example
///
/// ```rust
/// use dupesense::Optimizer;
///
/// let optimizer = Optimizer::new();
/// let analysis = optimizer.analyze("The cat sat. The cat sat. A dog ran.");
///
/// assert_eq!(analysis.sentences.len(), 3);
/// assert_eq!(analysis.legend.len(), 1);
/// assert_eq!(analysis.legend[0].indices, (0, 1));
/// assert_eq!(analysis.legend[0].percentage, 100);
///
/// let resolution = optimizer.resolve(&analysis);
/// assert_eq!(resolution.reduced_text, "The cat sat. A dog ran.");
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer<M = DiceSimilarity> {
    metric: M,
    thresholds: Thresholds,
    palette: PaletteConfig,
}

impl Optimizer<DiceSimilarity> {
    /// Create an optimizer with the Dice metric and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_metric(DiceSimilarity)
    }
}

impl Default for Optimizer<DiceSimilarity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SimilarityMetric> Optimizer<M> {
    /// Create an optimizer scoring with `metric`.
    #[must_use]
    pub fn with_metric(metric: M) -> Self {
        Self {
            metric,
            thresholds: Thresholds::default(),
            palette: PaletteConfig::default(),
        }
    }

    /// Set the thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the palette configuration.
    #[must_use]
    pub fn with_palette(mut self, palette: PaletteConfig) -> Self {
        self.palette = palette;
        self
    }

    /// The thresholds in use.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Analyze `text`, drawing colors from the thread RNG.
    pub fn analyze(&self, text: &str) -> Analysis {
        self.analyze_with_rng(text, rand::thread_rng())
    }

    /// Analyze `text`, drawing colors from `rng`.
    pub fn analyze_with_rng<R: Rng>(&self, text: &str, rng: R) -> Analysis {
        let seg = segment(text);
        let sentences = best_matches(&seg.sentences, &self.metric);
        let pairs = notable_pairs(&sentences, self.thresholds.notable());

        let keys: Vec<PairKey> = pairs.iter().map(|p| p.key).collect();
        let mut palette = Palette::with_rng(self.palette, rng);
        let colors = assign_colors(&keys, &mut palette);
        let legend = build_legend(&pairs, &colors);
        let highlights = HighlightMap::from_colors(&colors);

        tracing::debug!(
            sentences = sentences.len(),
            comparisons = sentences.len() * sentences.len().saturating_sub(1) / 2,
            notable = pairs.len(),
            "analysis complete"
        );

        Analysis {
            sentences,
            separators: seg.separators,
            pairs,
            legend,
            highlights,
        }
    }

    /// Erase near-duplicates from `analysis` without touching it.
    #[must_use]
    pub fn resolve(&self, analysis: &Analysis) -> Resolution {
        Resolution::new(
            &analysis.sentences,
            &analysis.separators,
            &analysis.legend,
            self.thresholds.duplicate(),
        )
    }

    /// Resolve duplicates, then ask `service` for a rewrite.
    ///
    /// Resolution runs synchronously before the single service call.
    ///
    /// # Errors
    ///
    /// See [`request_rewrite`].
    pub async fn fix<S>(&self, analysis: &Analysis, service: &S) -> Result<RewriteOutcome>
    where
        S: RewriteService + ?Sized,
    {
        let resolution = self.resolve(analysis);
        request_rewrite(&resolution, service).await
    }
}

//! Legend entries: one line of evidence per notable pair.

use crate::{Color, NotablePair, PairColors};

/// One notable pair, its color, and its score as a percentage.
///
/// Displays the way a reader sees it, with 1-based sentence numbers:
///
/// ```rust
/// use dupesense::{Color, LegendEntry};
///
/// let entry = LegendEntry {
///     color: Color::hsl(10, 85, 72),
///     indices: (0, 2),
///     percentage: 74,
/// };
/// assert_eq!(entry.to_string(), "Sentences 1 & 3: 74% similarity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegendEntry {
    /// Color shared by both sentences of the pair.
    pub color: Color,
    /// Zero-based `(reporter, match)`: the sentence that reported the pair
    /// first, then its best match. Not sorted.
    pub indices: (usize, usize),
    /// `round(similarity * 100)`.
    pub percentage: u8,
}

impl std::fmt::Display for LegendEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sentences {} & {}: {}% similarity",
            self.indices.0 + 1,
            self.indices.1 + 1,
            self.percentage
        )
    }
}

/// Build the legend in pair order.
///
/// Colors are looked up by the canonical key, but `indices` keeps the
/// reporting direction. A pair missing from `colors` gets
/// [`Color::FALLBACK`].
#[must_use]
pub fn build_legend(pairs: &[NotablePair], colors: &PairColors) -> Vec<LegendEntry> {
    pairs
        .iter()
        .map(|pair| LegendEntry {
            color: colors.get(pair.key).unwrap_or(Color::FALLBACK),
            indices: (pair.reporter, partner(pair)),
            percentage: pair.percentage(),
        })
        .collect()
}

fn partner(pair: &NotablePair) -> usize {
    if pair.reporter == pair.key.low() {
        pair.key.high()
    } else {
        pair.key.low()
    }
}

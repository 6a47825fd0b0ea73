//! Pair colors and per-sentence highlights.
//!
//! ## Picking Hues
//!
//! Every notable pair gets its own pastel color. Hues are drawn uniformly
//! from `[0, 360)` and rejected when they land too close to a hue already
//! handed out, or inside the reserved yellow band that reads as an
//! unstyled default:
//!
//! ```text
//! 0          50   70                                   360
//! |----------[////]------------------------------------|
//!             reserved
//!
//! used: 120        candidate 145 -> |145 - 120| < 40, re-roll
//! ```
//!
//! Distance is plain `|a - b|` on the number line, not around the wheel.
//! The number of draws per color is capped; a palette that runs out of
//! room hands out [`Color::FALLBACK`] instead of looping forever.
//!
//! ## Multi-Pair Sentences
//!
//! Because best matches are asymmetric, one sentence can sit in two or
//! more pairs. Its [`Highlight`] then carries every pair color in
//! acceptance order and renders as equal-width bands:
//!
//! ```text
//! colors: [red, blue]   ->   red 0%..50%, blue 50%..100%
//! ```

use std::collections::BTreeMap;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::{PaletteConfig, PairKey};

/// An HSL color.
///
/// ```rust
/// use dupesense::Color;
///
/// let c = Color::hsl(200, 85, 72);
/// assert_eq!(c.to_string(), "hsl(200, 85%, 72%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl Color {
    /// Neutral light grey used when no distinct hue is available.
    pub const FALLBACK: Self = Self::hsl(0, 0, 93);

    /// Build a color from hue (degrees) and saturation/lightness (percent).
    #[must_use]
    pub const fn hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Hue in degrees.
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Saturation in percent.
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Lightness in percent.
    #[must_use]
    pub const fn lightness(&self) -> u8 {
        self.lightness
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Rejection-sampling hue generator.
///
/// Uses the thread RNG by default; pass a seeded RNG through
/// [`Palette::with_rng`] for reproducible colors.
///
/// ```rust
/// use dupesense::{Palette, PaletteConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut palette = Palette::with_rng(PaletteConfig::default(), StdRng::seed_from_u64(7));
/// let a = palette.next_color();
/// let b = palette.next_color();
/// assert!(a.hue().abs_diff(b.hue()) >= 40);
/// ```
#[derive(Debug)]
pub struct Palette<R = ThreadRng> {
    config: PaletteConfig,
    used: Vec<u16>,
    rng: R,
}

impl Palette<ThreadRng> {
    /// Create a palette backed by the thread RNG.
    #[must_use]
    pub fn new(config: PaletteConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl Default for Palette<ThreadRng> {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}

impl<R: Rng> Palette<R> {
    /// Create a palette backed by `rng`.
    pub fn with_rng(config: PaletteConfig, rng: R) -> Self {
        Self {
            config,
            used: Vec::new(),
            rng,
        }
    }

    /// Hues handed out so far, in order.
    #[must_use]
    pub fn used_hues(&self) -> &[u16] {
        &self.used
    }

    /// Draw the next color.
    ///
    /// Returns [`Color::FALLBACK`] once `max_attempts` draws in a row are
    /// rejected. The fallback does not occupy a hue.
    pub fn next_color(&mut self) -> Color {
        for _ in 0..self.config.max_attempts() {
            let hue = self.rng.gen_range(0..360u16);
            if self.accepts(hue) {
                self.used.push(hue);
                return Color::hsl(hue, self.config.saturation(), self.config.lightness());
            }
        }
        tracing::warn!(
            used = self.used.len(),
            attempts = self.config.max_attempts(),
            "palette exhausted, using fallback color"
        );
        Color::FALLBACK
    }

    fn accepts(&self, hue: u16) -> bool {
        let (low, high) = self.config.reserved();
        if (low..=high).contains(&hue) {
            return false;
        }
        let gap = self.config.min_separation();
        self.used.iter().all(|&u| u.abs_diff(hue) >= gap)
    }
}

/// Colors assigned to pairs, in acceptance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairColors {
    entries: Vec<(PairKey, Color)>,
}

impl PairColors {
    /// The color of `key`, if it was assigned one.
    #[must_use]
    pub fn get(&self, key: PairKey) -> Option<Color> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, c)| *c)
    }

    /// Iterate `(pair, color)` in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = (PairKey, Color)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of colored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pair was colored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Give each pair one color from `palette`.
///
/// Duplicate keys keep their first color.
pub fn assign_colors<R: Rng>(pairs: &[PairKey], palette: &mut Palette<R>) -> PairColors {
    let mut colors = PairColors::default();
    for &key in pairs {
        if colors.get(key).is_none() {
            let color = palette.next_color();
            colors.entries.push((key, color));
        }
    }
    colors
}

/// The colors covering one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    colors: Vec<Color>,
}

impl Highlight {
    /// The colors, in acceptance order of their pairs.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Equal-width bands as `(color, start%, end%)`.
    ///
    /// ```rust
    /// use dupesense::{HighlightMap, PairKey};
    /// # use dupesense::{assign_colors, Palette, PaletteConfig};
    /// # use rand::{rngs::StdRng, SeedableRng};
    /// # let mut palette = Palette::with_rng(PaletteConfig::default(), StdRng::seed_from_u64(1));
    /// let colors = assign_colors(&[PairKey::new(0, 1), PairKey::new(1, 2), PairKey::new(1, 3)], &mut palette);
    /// let map = HighlightMap::from_colors(&colors);
    ///
    /// let bands: Vec<(u8, u8)> = map.get(1).unwrap().stops().map(|(_, s, e)| (s, e)).collect();
    /// assert_eq!(bands, [(0, 33), (33, 67), (67, 100)]);
    /// ```
    pub fn stops(&self) -> impl Iterator<Item = (Color, u8, u8)> + '_ {
        let n = self.colors.len() as f64;
        self.colors.iter().enumerate().map(move |(i, &color)| {
            let start = (i as f64 / n * 100.0).round() as u8;
            let end = ((i + 1) as f64 / n * 100.0).round() as u8;
            (color, start, end)
        })
    }

    /// CSS background: a plain color, or a hard-stop gradient for several.
    #[must_use]
    pub fn css(&self) -> String {
        match self.colors.as_slice() {
            [] => String::new(),
            [only] => only.to_string(),
            _ => {
                let stops: Vec<String> = self
                    .stops()
                    .map(|(c, start, end)| format!("{c} {start}%, {c} {end}%"))
                    .collect();
                format!("linear-gradient(90deg, {})", stops.join(", "))
            }
        }
    }
}

/// Sentence index to the colors highlighting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightMap {
    by_sentence: BTreeMap<usize, Highlight>,
}

impl HighlightMap {
    /// Accumulate each pair's color onto both of its sentences.
    #[must_use]
    pub fn from_colors(colors: &PairColors) -> Self {
        let mut map = Self::default();
        for (key, color) in colors.iter() {
            for idx in [key.low(), key.high()] {
                map.by_sentence
                    .entry(idx)
                    .or_default()
                    .colors
                    .push(color);
            }
        }
        map
    }

    /// The highlight for sentence `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Highlight> {
        self.by_sentence.get(&index)
    }

    /// Iterate highlighted sentences in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Highlight)> {
        self.by_sentence.iter().map(|(i, h)| (*i, h))
    }

    /// Number of highlighted sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_sentence.len()
    }

    /// Whether nothing is highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_sentence.is_empty()
    }
}

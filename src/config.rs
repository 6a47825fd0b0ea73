//! Thresholds and palette configuration.
//!
//! ## Two Thresholds
//!
//! A single similarity score drives two different decisions:
//!
//! ```text
//! 0.0 ─────────────── 0.5 ─────────────── 0.9 ──── 1.0
//!       ignored        │     highlighted    │  erased
//!                   notable             duplicate
//! ```
//!
//! - `notable`: pairs scoring strictly above it are grouped, colored, and
//!   listed in the legend.
//! - `duplicate`: a sentence scoring strictly above it gets its match
//!   soft-deleted before the rewrite request is built.
//!
//! Both comparisons are strict: a pair at exactly 0.5 is not notable, a
//! pair at exactly 0.9 is not erased.

/// Default notable-similarity threshold.
pub const DEFAULT_NOTABLE: f64 = 0.5;

/// Default duplicate threshold.
pub const DEFAULT_DUPLICATE: f64 = 0.9;

/// Similarity thresholds for grouping and soft-deletion.
///
/// # Examples
///
/// ```rust
/// use dupesense::Thresholds;
///
/// let t = Thresholds::default();
/// assert_eq!(t.notable(), 0.5);
/// assert_eq!(t.duplicate(), 0.9);
///
/// let strict = Thresholds::new(0.6, 0.95).unwrap();
/// assert!(strict.is_notable(0.61));
/// assert!(!strict.is_duplicate(0.95));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    notable: f64,
    duplicate: f64,
}

impl Thresholds {
    /// Create thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if either value lies outside `[0, 1]` or if
    /// `duplicate < notable`.
    pub fn new(notable: f64, duplicate: f64) -> Result<Self, ConfigError> {
        check_unit("notable", notable)?;
        check_unit("duplicate", duplicate)?;
        if duplicate < notable {
            return Err(ConfigError::DuplicateBelowNotable { notable, duplicate });
        }
        Ok(Self { notable, duplicate })
    }

    /// Replace the notable threshold.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Thresholds::new`].
    pub fn with_notable(self, notable: f64) -> Result<Self, ConfigError> {
        Self::new(notable, self.duplicate)
    }

    /// Replace the duplicate threshold.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Thresholds::new`].
    pub fn with_duplicate(self, duplicate: f64) -> Result<Self, ConfigError> {
        Self::new(self.notable, duplicate)
    }

    /// The notable-similarity threshold.
    #[must_use]
    pub const fn notable(&self) -> f64 {
        self.notable
    }

    /// The duplicate threshold.
    #[must_use]
    pub const fn duplicate(&self) -> f64 {
        self.duplicate
    }

    /// Whether `score` clears the notable threshold (strict).
    #[must_use]
    pub fn is_notable(&self, score: f64) -> bool {
        score > self.notable
    }

    /// Whether `score` clears the duplicate threshold (strict).
    #[must_use]
    pub fn is_duplicate(&self, score: f64) -> bool {
        score > self.duplicate
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            notable: DEFAULT_NOTABLE,
            duplicate: DEFAULT_DUPLICATE,
        }
    }
}

/// Palette parameters for pair colors.
///
/// Hues are rejection-sampled: a candidate is re-rolled when it sits
/// within `min_separation` degrees of an already used hue, or inside the
/// `reserved` band. After `max_attempts` rejections the palette gives up
/// and hands out its fallback color.
///
/// ```rust
/// use dupesense::PaletteConfig;
///
/// let cfg = PaletteConfig::default().with_max_attempts(16).unwrap();
/// assert_eq!(cfg.min_separation(), 40);
/// assert_eq!(cfg.reserved(), (50, 70));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteConfig {
    min_separation: u16,
    reserved: (u16, u16),
    saturation: u8,
    lightness: u8,
    max_attempts: usize,
}

impl PaletteConfig {
    /// Minimum hue distance (degrees) between two assigned colors.
    #[must_use]
    pub const fn min_separation(&self) -> u16 {
        self.min_separation
    }

    /// Inclusive hue band never handed out.
    #[must_use]
    pub const fn reserved(&self) -> (u16, u16) {
        self.reserved
    }

    /// Saturation percentage of every assigned color.
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Lightness percentage of every assigned color.
    #[must_use]
    pub const fn lightness(&self) -> u8 {
        self.lightness
    }

    /// Hue draws allowed per color before falling back.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Set the minimum hue separation.
    ///
    /// # Errors
    ///
    /// Returns an error if `degrees >= 360`.
    pub fn with_min_separation(self, degrees: u16) -> Result<Self, ConfigError> {
        if degrees >= 360 {
            return Err(ConfigError::HueOutOfRange(degrees));
        }
        Ok(Self {
            min_separation: degrees,
            ..self
        })
    }

    /// Set the reserved hue band (inclusive).
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is `>= 360` or `low > high`.
    pub fn with_reserved(self, low: u16, high: u16) -> Result<Self, ConfigError> {
        if low >= 360 {
            return Err(ConfigError::HueOutOfRange(low));
        }
        if high >= 360 {
            return Err(ConfigError::HueOutOfRange(high));
        }
        if low > high {
            return Err(ConfigError::InvertedBand { low, high });
        }
        Ok(Self {
            reserved: (low, high),
            ..self
        })
    }

    /// Set saturation and lightness percentages.
    ///
    /// # Errors
    ///
    /// Returns an error if either exceeds 100.
    pub fn with_tone(self, saturation: u8, lightness: u8) -> Result<Self, ConfigError> {
        for value in [saturation, lightness] {
            if value > 100 {
                return Err(ConfigError::PercentOutOfRange(value));
            }
        }
        Ok(Self {
            saturation,
            lightness,
            ..self
        })
    }

    /// Set the retry cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `attempts == 0`.
    pub fn with_max_attempts(self, attempts: usize) -> Result<Self, ConfigError> {
        if attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self {
            max_attempts: attempts,
            ..self
        })
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        // Pastel tones, with the yellow band that reads as "unstyled" held out.
        Self {
            min_separation: 40,
            reserved: (50, 70),
            saturation: 85,
            lightness: 72,
            max_attempts: 64,
        }
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { name, value })
    }
}

/// Error when configuring thresholds or the palette.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Thresholds must lie in `[0, 1]`.
    #[error("{name} threshold {value} outside [0, 1]")]
    ThresholdOutOfRange {
        /// Which threshold.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The duplicate threshold must be at least the notable threshold.
    #[error("duplicate threshold ({duplicate}) must be >= notable ({notable})")]
    DuplicateBelowNotable {
        /// The notable threshold.
        notable: f64,
        /// The duplicate threshold that was too small.
        duplicate: f64,
    },

    /// Hue values live in `[0, 360)`.
    #[error("hue {0} outside [0, 360)")]
    HueOutOfRange(u16),

    /// Reserved band bounds are reversed.
    #[error("reserved hue band {low}..={high} is inverted")]
    InvertedBand {
        /// Lower bound.
        low: u16,
        /// Upper bound.
        high: u16,
    },

    /// Percentages live in `[0, 100]`.
    #[error("percentage {0} exceeds 100")]
    PercentOutOfRange(u8),

    /// The palette needs at least one draw per color.
    #[error("max_attempts must be > 0")]
    ZeroAttempts,
}

//! Soft-deletion of near-duplicate sentences.
//!
//! ## Which Sentence Goes
//!
//! Scanning in index order, a sentence whose best match scores above the
//! duplicate threshold erases its *match*, not itself:
//!
//! ```text
//! 0: "The cat sat."  ──1.0──▶ 1      erase 1
//! 1: "The cat sat."  ──1.0──▶ 0      (already zeroed, skipped)
//! 2: "A dog ran."
//! ```
//!
//! Erasing sets the text to `""` and the score to 0 while the slot and its
//! separator stay in place. Because the erased sentence's own score is
//! zeroed, it cannot go on to erase its partner later in the scan, so one
//! of every mutual duplicate pair survives. Erasing an already empty slot
//! is a no-op, and running the resolver on its own output changes nothing.
//!
//! ## Reduced Text
//!
//! The reduced text joins every surviving body with its separator.
//! Erased slots contribute nothing, separator included, so removing a
//! sentence never leaves doubled whitespace behind:
//!
//! ```text
//! "The cat sat." " "  |  "" " "  |  "A dog ran." ""
//!  -> "The cat sat. A dog ran."
//! ```

use crate::segment::join;
use crate::{LegendEntry, Sentence};

/// Soft-delete the matches of sentences scoring above `threshold`.
///
/// Works on a copy; `sentences` is left untouched.
///
/// ```rust
/// use dupesense::{resolve_duplicates, Sentence};
///
/// let sentences = [
///     Sentence::with_match("The cat sat.", 1.0, 1),
///     Sentence::with_match("The cat sat.", 1.0, 0),
///     Sentence::with_match("A dog ran.", 0.0, 0),
/// ];
/// let resolved = resolve_duplicates(&sentences, 0.9);
///
/// assert_eq!(resolved[0].text, "The cat sat.");
/// assert!(resolved[1].is_erased());
/// assert_eq!(resolved[2].text, "A dog ran.");
/// ```
#[must_use]
pub fn resolve_duplicates(sentences: &[Sentence], threshold: f64) -> Vec<Sentence> {
    let mut resolved = sentences.to_vec();

    for i in 0..resolved.len() {
        let Some(target) = resolved[i].similar_to else {
            continue;
        };
        if resolved[i].similarity <= threshold {
            continue;
        }
        // A stale index from a hand-built array is ignored rather than trusted.
        let Some(victim) = resolved.get_mut(target) else {
            continue;
        };
        if !victim.text.is_empty() {
            tracing::debug!(erased = target, kept = i, "soft-deleting duplicate sentence");
        }
        victim.text.clear();
        victim.similarity = 0.0;
    }

    resolved
}

/// Join surviving sentences with their separators.
///
/// Erased slots are skipped together with their separator.
#[must_use]
pub fn reduced_text(sentences: &[Sentence], separators: &[String]) -> String {
    let mut out = String::new();
    for (sentence, sep) in sentences.iter().zip(separators) {
        if sentence.is_erased() {
            continue;
        }
        out.push_str(&sentence.text);
        out.push_str(sep);
    }
    out
}

/// Everything produced by one duplicate-resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The sentences after soft-deletion.
    pub sentences: Vec<Sentence>,
    /// Text with duplicates removed.
    pub reduced_text: String,
    /// Reconstruction of the untouched sentences.
    pub original_text: String,
    /// The legend of the analysis, as supporting evidence.
    pub legend: Vec<LegendEntry>,
}

impl Resolution {
    /// Run the resolver over `sentences` and assemble both texts.
    #[must_use]
    pub fn new(
        sentences: &[Sentence],
        separators: &[String],
        legend: &[LegendEntry],
        threshold: f64,
    ) -> Self {
        let resolved = resolve_duplicates(sentences, threshold);
        let reduced = reduced_text(&resolved, separators);
        let original = join(sentences.iter().map(|s| s.text.as_str()), separators);
        Self {
            sentences: resolved,
            reduced_text: reduced,
            original_text: original,
            legend: legend.to_vec(),
        }
    }

    /// Indices of the sentences this pass erased.
    #[must_use]
    pub fn erased(&self) -> Vec<usize> {
        self.sentences
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_erased())
            .map(|(i, _)| i)
            .collect()
    }
}

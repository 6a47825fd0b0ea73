//! Sentence segmentation with lossless separators.
//!
//! Splits text into sentence bodies and the exact whitespace that followed
//! each one, so the original document can be rebuilt byte-for-byte.
//!
//! ## Rules
//!
//! A body is a run of non-terminator characters followed by one terminator
//! from [`TERMINATORS`]. The whitespace after it, up to the next
//! non-whitespace character, is that body's separator.
//!
//! ```text
//! "The cat sat.  A dog ran!\nOk"
//!
//!  body 0: "The cat sat."   separator 0: "  "
//!  body 1: "A dog ran!"     separator 1: "\n"
//!  body 2: "Ok"             separator 2: ""      <- trailing fragment
//! ```
//!
//! Text left over after the last terminator becomes one final, trimmed
//! sentence with an empty separator. That trim is lossy on purpose: a
//! document without terminal punctuation does not round-trip its trailing
//! whitespace.
//!
//! The run before a terminator may be empty, so `"Wait..."` yields
//! `"Wait."`, `"."`, `"."` and every document ending in a terminator
//! reconstructs exactly.
//!
//! Only the ASCII terminators are recognized. Abbreviations such as
//! "Dr." split like any other period.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that end a sentence.
pub const TERMINATORS: [char; 4] = ['.', '!', '?', ';'];

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^.!?;]*[.!?;])(\s*)").expect("sentence pattern compiles"));

/// Sentence bodies and their separators, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Sentence bodies, including their terminator.
    pub sentences: Vec<String>,
    /// Whitespace that followed each body (possibly empty).
    pub separators: Vec<String>,
}

impl Segmentation {
    /// Number of sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether no sentence was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Concatenate every body with its separator.
    ///
    /// ```rust
    /// use dupesense::segment;
    ///
    /// let text = "One.  Two?\tThree!";
    /// assert_eq!(segment(text).reconstruct(), text);
    /// ```
    #[must_use]
    pub fn reconstruct(&self) -> String {
        join(self.sentences.iter().map(String::as_str), &self.separators)
    }
}

/// Split `text` into sentences and separators.
///
/// Never fails: empty or whitespace-only input yields an empty
/// [`Segmentation`].
///
/// ## Example
///
/// ```rust
/// use dupesense::segment;
///
/// let seg = segment("The cat sat. The cat sat. A dog ran.");
/// assert_eq!(seg.sentences, ["The cat sat.", "The cat sat.", "A dog ran."]);
/// assert_eq!(seg.separators, [" ", " ", ""]);
///
/// let seg = segment("hello world");
/// assert_eq!(seg.sentences, ["hello world"]);
/// assert_eq!(seg.separators, [""]);
/// ```
#[must_use]
pub fn segment(text: &str) -> Segmentation {
    let mut seg = Segmentation::default();
    let mut consumed = 0;

    for caps in SENTENCE.captures_iter(text) {
        let (Some(whole), Some(body), Some(sep)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        seg.sentences.push(body.as_str().to_string());
        seg.separators.push(sep.as_str().to_string());
        consumed = whole.end();
    }

    let remainder = text[consumed..].trim();
    if !remainder.is_empty() {
        seg.sentences.push(remainder.to_string());
        seg.separators.push(String::new());
    }

    seg
}

/// Concatenate `texts[i] + separators[i]` for every index.
pub(crate) fn join<'a>(texts: impl Iterator<Item = &'a str>, separators: &[String]) -> String {
    let mut out = String::new();
    for (text, sep) in texts.zip(separators) {
        out.push_str(text);
        out.push_str(sep);
    }
    out
}

//! End-to-end scenarios for detection, grouping, and resolution.

use rand::rngs::StdRng;
use rand::SeedableRng;
use dupesense::{
    assign_colors, build_legend, notable_pairs, Optimizer, PairKey, Palette, PaletteConfig,
    Sentence, SimilarityMetric, Thresholds,
};

// =============================================================================
// Helpers
// =============================================================================

/// Metric reading scores from a symmetric table keyed by the sentence digit.
struct Table(Vec<Vec<f64>>);

impl SimilarityMetric for Table {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let idx = |s: &str| -> usize { s.trim().parse().unwrap() };
        self.0[idx(a)][idx(b)]
    }
}

fn seeded_optimizer_run(text: &str, metric: Table) -> dupesense::Analysis {
    Optimizer::with_metric(metric).analyze_with_rng(text, StdRng::seed_from_u64(17))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn repeated_sentence_is_erased() {
    let text = "The cat sat. The cat sat. A dog ran.";
    let optimizer = Optimizer::new();
    let analysis = optimizer.analyze(text);

    let texts: Vec<&str> = analysis.sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, ["The cat sat.", "The cat sat.", "A dog ran."]);
    assert_eq!(analysis.separators, [" ", " ", ""]);

    assert_eq!(analysis.sentences[0].similar_to, Some(1));
    assert_eq!(analysis.sentences[1].similar_to, Some(0));
    assert!((analysis.sentences[0].similarity - 1.0).abs() < 1e-12);
    assert!(analysis.sentences[2].similarity < 0.5);

    let resolution = optimizer.resolve(&analysis);
    assert_eq!(resolution.reduced_text, "The cat sat. A dog ran.");
    assert_eq!(resolution.original_text, text);
    assert_eq!(resolution.erased(), [1]);

    // The analysis itself is untouched.
    assert_eq!(analysis.sentences[1].text, "The cat sat.");
}

#[test]
fn unterminated_text_is_one_sentence() {
    let analysis = Optimizer::new().analyze("hello world");
    assert_eq!(analysis.sentences, [Sentence::new("hello world")]);
    assert_eq!(analysis.separators, [""]);
    assert!(analysis.is_clean());
}

#[test]
fn empty_and_punctuation_only_input() {
    let optimizer = Optimizer::new();
    for text in ["", "   ", "...", "?!;."] {
        let analysis = optimizer.analyze(text);
        assert!(analysis.is_clean(), "unexpected legend for {text:?}");
        let resolution = optimizer.resolve(&analysis);
        assert_eq!(resolution.original_text, text.trim_end_matches(' '));
    }
}

#[test]
fn asymmetric_matches_form_two_pairs() {
    // A -> B at 0.7, B -> C at 0.8, C -> B at 0.8.
    let table = Table(vec![
        vec![0.0, 0.7, 0.2],
        vec![0.7, 0.0, 0.8],
        vec![0.2, 0.8, 0.0],
    ]);
    let analysis = seeded_optimizer_run("0. 1. 2.", table);

    let legend: Vec<((usize, usize), u8)> = analysis
        .legend
        .iter()
        .map(|e| (e.indices, e.percentage))
        .collect();
    assert_eq!(legend, [((0, 1), 70), ((1, 2), 80)]);

    let b = analysis.highlights.get(1).unwrap();
    assert_eq!(b.colors().len(), 2);
    assert_eq!(b.colors()[0], analysis.legend[0].color);
    assert_eq!(b.colors()[1], analysis.legend[1].color);
    assert!(b.css().starts_with("linear-gradient(90deg, "));

    assert_eq!(analysis.highlights.get(0).unwrap().colors().len(), 1);
    assert_eq!(analysis.highlights.get(2).unwrap().colors().len(), 1);
}

#[test]
fn asymmetry_built_by_hand() {
    let sentences = [
        Sentence::with_match("A.", 0.7, 1),
        Sentence::with_match("B.", 0.8, 2),
        Sentence::with_match("C.", 0.8, 1),
    ];
    let pairs = notable_pairs(&sentences, 0.5);
    let keys: Vec<PairKey> = pairs.iter().map(|p| p.key).collect();
    let mut palette = Palette::with_rng(PaletteConfig::default(), StdRng::seed_from_u64(2));
    let colors = assign_colors(&keys, &mut palette);
    let legend = build_legend(&pairs, &colors);

    assert_eq!(legend.len(), 2);
    assert_eq!(legend[0].to_string(), "Sentences 1 & 2: 70% similarity");
    assert_eq!(legend[1].to_string(), "Sentences 2 & 3: 80% similarity");
}

#[test]
fn legend_lists_reporter_first() {
    // 0 <-> 1 at 0.8; 2 picks 0 at 0.7, so the later sentence reports (0, 2).
    let table = Table(vec![
        vec![0.0, 0.8, 0.7],
        vec![0.8, 0.0, 0.1],
        vec![0.7, 0.1, 0.0],
    ]);
    let analysis = seeded_optimizer_run("0. 1. 2.", table);

    assert_eq!(analysis.pairs[1].key, PairKey::new(0, 2));
    assert_eq!(analysis.pairs[1].reporter, 2);
    assert_eq!(analysis.legend[0].indices, (0, 1));
    assert_eq!(analysis.legend[1].indices, (2, 0));
    assert_eq!(
        analysis.legend[1].to_string(),
        "Sentences 3 & 1: 70% similarity"
    );

    // Colors still follow the canonical pair.
    let first = analysis.highlights.get(0).unwrap();
    assert_eq!(first.colors(), [analysis.legend[0].color, analysis.legend[1].color]);
}

#[test]
fn notable_boundary_is_exclusive() {
    let table = Table(vec![vec![0.0, 0.5], vec![0.5, 0.0]]);
    let analysis = seeded_optimizer_run("0. 1.", table);
    assert!(analysis.is_clean());
    assert!(analysis.highlights.is_empty());
}

#[test]
fn duplicate_boundary_is_exclusive() {
    let optimizer = Optimizer::with_metric(Table(vec![vec![0.0, 0.9], vec![0.9, 0.0]]));
    let analysis = optimizer.analyze_with_rng("0. 1.", StdRng::seed_from_u64(0));
    assert_eq!(analysis.legend.len(), 1);
    assert_eq!(analysis.legend[0].percentage, 90);

    let resolution = optimizer.resolve(&analysis);
    assert!(resolution.erased().is_empty());
    assert_eq!(resolution.reduced_text, "0. 1.");
}

#[test]
fn just_above_duplicate_boundary_erases() {
    let optimizer = Optimizer::with_metric(Table(vec![vec![0.0, 0.91], vec![0.91, 0.0]]));
    let analysis = optimizer.analyze_with_rng("0. 1.", StdRng::seed_from_u64(0));
    let resolution = optimizer.resolve(&analysis);
    assert_eq!(resolution.erased(), [1]);
    assert_eq!(resolution.reduced_text, "0. ");
}

#[test]
fn many_pairs_exhaust_palette_gracefully() {
    // Twenty mutual pairs; at most nine hues fit 40 degrees apart.
    let mut text = String::new();
    for i in 0..20 {
        let word: String = std::iter::repeat(char::from(b'a' + i as u8)).take(6).collect();
        text.push_str(&format!("{word} {i}x. {word} {i}x. "));
    }
    let optimizer = Optimizer::new()
        .with_palette(PaletteConfig::default().with_max_attempts(32).unwrap());
    let analysis = optimizer.analyze_with_rng(&text, StdRng::seed_from_u64(99));

    assert_eq!(analysis.legend.len(), 20);
    assert!(analysis
        .legend
        .iter()
        .any(|e| e.color == dupesense::Color::FALLBACK));
}

#[test]
fn separators_survive_resolution() {
    let text = "Keep this one.\n\nSame words here!\tSame words here!  Last line.";
    let optimizer = Optimizer::new();
    let analysis = optimizer.analyze(text);
    let resolution = optimizer.resolve(&analysis);

    assert_eq!(resolution.erased(), [2]);
    assert_eq!(
        resolution.reduced_text,
        "Keep this one.\n\nSame words here!\tLast line."
    );
}

#[test]
fn stricter_thresholds_shrink_the_legend() {
    let text = "The cat sat on the mat. The cat sat on a mat. Dogs bark loudly.";
    let default = Optimizer::new().analyze(text);
    let strict = Optimizer::new()
        .with_thresholds(Thresholds::new(0.85, 0.95).unwrap())
        .analyze(text);
    assert_eq!(default.legend.len(), 1);
    assert!(strict.is_clean());
}

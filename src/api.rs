use crate::StepId;
use crate::engine::{self, RunMetrics, StepGraph, StepSet, Visit};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::time::{Duration, Instant};

static DEFAULT_GRAPH: Lazy<StepGraph> = Lazy::new(|| StepGraph::new(crate::rules::get()));

/// Words at most this many bytes long (after trimming and lowercasing) are
/// returned as is.
const SHORT_WORD_MAX_LEN: usize = 3;

/// Options that affect stemming output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Strip diacritics from the stem (`coraçã` -> `coraca`). Default: `true`.
    pub remove_diacritics: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { remove_diacritics: true }
    }
}

impl Options {
    /// Options that keep accented characters in the output.
    pub fn keep_diacritics() -> Self {
        Self { remove_diacritics: false }
    }
}

/// One step visited while stemming a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace {
    pub step: StepId,
    /// Word as it entered the step.
    pub input: String,
    /// Word as it left the step (equal to `input` when nothing fired).
    pub output: String,
    /// Suffix of the rule that fired, if any.
    pub rule: Option<&'static str>,
}

/// Result of [`stem_verbose_with`]: the stem plus how it was reached.
#[derive(Debug, Clone)]
pub struct StemDetails {
    /// The word as given.
    pub input: String,
    /// Same value [`stem_with`] returns for `input`.
    pub output: String,
    /// True when the word was too short to enter the step graph.
    pub short_word: bool,
    /// Steps whose rules rewrote the word.
    pub applied: StepSet,
    /// Visited steps, in order.
    pub trace: Vec<StepTrace>,
    pub total: Duration,
    pub traversal: Duration,
    pub normalize: Duration,
}

/// Stem a single Portuguese word with the default [`Options`].
///
/// # Example
/// ```
/// use rslp::stem;
///
/// assert_eq!(stem("coração"), "coraca");
/// assert_eq!(stem("continuando"), "continu");
/// ```
pub fn stem(word: &str) -> String {
    stem_with(word, &Options::default())
}

/// Stem a single word: trim, lowercase, walk the step graph, then optionally
/// strip diacritics.
///
/// Empty and whitespace-only input yields an empty string. Words of three
/// bytes or less are only trimmed and lowercased.
pub fn stem_with(word: &str, options: &Options) -> String {
    let word = prepare(word);
    if word.len() <= SHORT_WORD_MAX_LEN {
        return word;
    }

    let traversal = DEFAULT_GRAPH.traverse(word, false);
    finish(traversal.word, options)
}

/// Stem every whitespace-separated token of `sentence` with the default
/// [`Options`] and join the stems with single spaces.
pub fn stem_sentence(sentence: &str) -> String {
    stem_sentence_with(sentence, &Options::default())
}

/// Like [`stem_sentence`] with explicit options.
///
/// Tokens are split on any whitespace and stemmed independently; punctuation
/// stays attached to its token.
pub fn stem_sentence_with(sentence: &str, options: &Options) -> String {
    let mut out = String::with_capacity(sentence.len());
    for (idx, token) in sentence.split_whitespace().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(&stem_with(token, options));
    }
    out
}

/// Stem `word` and return the per-step trace and timings alongside the stem.
///
/// The default [`stem_with`] path does not allocate these traces.
pub fn stem_verbose_with(word: &str, options: &Options) -> StemDetails {
    let start = Instant::now();
    let mut metrics = RunMetrics::default();
    let prepared = prepare(word);

    let short_word = prepared.len() <= SHORT_WORD_MAX_LEN;
    let (output, applied, visits) = if short_word {
        (prepared, StepSet::empty(), Vec::new())
    } else {
        let traversal_start = Instant::now();
        let traversal = DEFAULT_GRAPH.traverse(prepared, true);
        metrics.traversal = traversal_start.elapsed();

        let normalize_start = Instant::now();
        let output = finish(traversal.word, options);
        metrics.normalize = normalize_start.elapsed();

        (output, traversal.applied, traversal.visits)
    };
    metrics.total = start.elapsed();

    StemDetails {
        input: word.to_string(),
        output,
        short_word,
        applied,
        trace: visits.into_iter().map(visit_to_trace).collect(),
        total: metrics.total,
        traversal: metrics.traversal,
        normalize: metrics.normalize,
    }
}

/// Run a single step (entry gate + rules) against `word`.
///
/// Returns the rewritten word and `true` when a rule fired, otherwise the
/// word unchanged and `false`. No trimming or lowercasing is done.
///
/// ```
/// use rslp::{StepId, apply_step};
///
/// assert_eq!(apply_step("bons", StepId::Plural), ("bom".to_string(), true));
/// assert_eq!(apply_step("casa", StepId::Plural), ("casa".to_string(), false));
/// ```
pub fn apply_step(word: &str, step: StepId) -> (String, bool) {
    match DEFAULT_GRAPH.step(step).apply(word) {
        Some(rewrite) => (rewrite.word, true),
        None => (word.to_string(), false),
    }
}

/// A stemming algorithm usable as a token filter stage.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// [`Stemmer`] for Portuguese backed by the default step graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortugueseStemmer {
    options: Options,
}

impl PortugueseStemmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn stem_sentence(&self, sentence: &str) -> String {
        stem_sentence_with(sentence, &self.options)
    }
}

impl Stemmer for PortugueseStemmer {
    fn stem(&self, word: &str) -> String {
        stem_with(word, &self.options)
    }

    fn name(&self) -> &'static str {
        "rslp"
    }
}

fn prepare(word: &str) -> String {
    word.trim().to_lowercase()
}

fn finish(word: String, options: &Options) -> String {
    if !options.remove_diacritics {
        return word;
    }
    match engine::strip_diacritics(&word) {
        Cow::Borrowed(_) => word,
        Cow::Owned(stripped) => stripped,
    }
}

fn visit_to_trace(visit: Visit) -> StepTrace {
    StepTrace { step: visit.step, input: visit.input, output: visit.output, rule: visit.rule }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_input_yield_empty_output() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("            "), "");
        assert_eq!(stem_sentence(""), "");
        assert_eq!(stem_sentence(" \t\n "), "");
    }

    #[test]
    fn short_words_are_only_trimmed_and_lowercased() {
        for (input, expected) in [("a1a", "a1a"), ("Os", "os"), ("  MAL ", "mal"), ("dá", "dá"), ("É", "é")] {
            assert_eq!(stem(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn short_word_check_happens_after_trimming() {
        // Padded to more than three bytes, still a short word.
        assert_eq!(stem("   ias   "), "ias");
    }

    #[test]
    fn short_word_cut_off_counts_bytes() {
        // "não" is 4 bytes and goes through the graph.
        assert_eq!(stem("não"), "na");
        assert_eq!(stem_with("não", &Options::keep_diacritics()), "nã");
    }

    #[test]
    fn input_is_lowercased_before_matching() {
        assert_eq!(stem("CANTANDO"), "cant");
        assert_eq!(stem("Coração"), "coraca");
    }

    #[test]
    fn stemming_is_deterministic() {
        for word in ["coração", "funcionamento", "continuando", "utilizar-se", "cantariam"] {
            assert_eq!(stem(word), stem(word));
        }
    }

    #[test]
    fn diacritics_can_be_kept() {
        let keep = Options::keep_diacritics();
        assert_eq!(stem_with("coração", &keep), "coraçã");
        assert_eq!(stem_with("polêmico", &keep), "polêm");
        assert_eq!(stem("polêmico"), "polem");
    }

    #[test]
    fn sentence_collapses_whitespace() {
        assert_eq!(stem_sentence("  cantando\t\tbebendo \n partindo "), "cant beb part");
    }

    #[test]
    fn sentence_scenarios() {
        let cases = [
            ("Que você faça o bem e não o mal.", "que voc fac o bem e na o mal.", Options::default()),
            (
                "Que você encontre perdão para si mesmo e perdoe os outros.",
                "que voc encontr perd par si mesm e perdo os outros.",
                Options::default(),
            ),
            (
                "Que você compartilhe livremente, nunca recebendo mais do que você dá.",
                "que voc compartilh livremente, nunc receb mais do que voc dá.",
                Options::keep_diacritics(),
            ),
        ];

        for (input, expected, options) in cases {
            assert_eq!(stem_sentence_with(input, &options), expected);
        }
    }

    #[test]
    fn apply_step_reports_rewrites() {
        assert_eq!(apply_step("bons", StepId::Plural), ("bom".to_string(), true));
        assert_eq!(apply_step("balões", StepId::Plural), ("balão".to_string(), true));
        assert_eq!(apply_step("vilã", StepId::Plural), ("vilã".to_string(), false));
        assert_eq!(apply_step("vilã", StepId::Feminine), ("vilã".to_string(), false));
    }

    #[test]
    fn verbose_output_matches_plain_stem() {
        let options = Options::default();
        for word in ["coraçãozinho", "amabilíssimo", "menina", "bons", "mal", ""] {
            let details = stem_verbose_with(word, &options);
            assert_eq!(details.output, stem_with(word, &options), "word {word:?}");
            assert_eq!(details.input, word);
            assert!(details.traversal <= details.total);
        }
    }

    #[test]
    fn verbose_trace_lists_visited_steps() {
        let details = stem_verbose_with("coraçãozinho", &Options::default());

        assert!(!details.short_word);
        assert_eq!(details.output, "coraca");
        assert_eq!(details.applied, StepSet::AUGMENTATIVE | StepSet::VOWEL);

        let fired: Vec<(StepId, &str, Option<&str>)> = details
            .trace
            .iter()
            .filter(|t| t.rule.is_some())
            .map(|t| (t.step, t.output.as_str(), t.rule))
            .collect();
        assert_eq!(
            fired,
            vec![(StepId::Augmentative, "coração", Some("zinho")), (StepId::Vowel, "coraçã", Some("o"))]
        );
    }

    #[test]
    fn verbose_short_word_has_no_trace() {
        let details = stem_verbose_with("Mal", &Options::default());
        assert!(details.short_word);
        assert_eq!(details.output, "mal");
        assert!(details.trace.is_empty());
        assert!(details.applied.is_empty());
    }

    #[test]
    fn stemmer_trait_object() {
        let stemmers: Vec<Box<dyn Stemmer>> = vec![
            Box::new(PortugueseStemmer::new()),
            Box::new(PortugueseStemmer::with_options(Options::keep_diacritics())),
        ];

        assert_eq!(stemmers[0].stem("coração"), "coraca");
        assert_eq!(stemmers[1].stem("coração"), "coraçã");
        assert!(stemmers.iter().all(|s| s.name() == "rslp"));
    }

    #[test]
    fn concurrent_callers_share_the_graph() {
        let words = ["cantariam", "bebendo", "partiram", "funcionamento"];
        let expected: Vec<String> = words.iter().map(|w| stem(w)).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| words.iter().map(|w| stem(w)).collect::<Vec<String>>()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

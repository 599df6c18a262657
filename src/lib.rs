//! An offline content-safety filter for user-submitted text.
//!
//! A [`ContentFilter`] decides whether a message, post, or display name must be rejected for
//! containing profanity, slurs, sexual content, violent or self-harm language, hate speech, drug
//! references, bullying, or blasphemy, including attempts to disguise any of these. Classification
//! is a pure function of the input: it performs no I/O, keeps no state between calls, and is safe
//! to call from many threads at once.
//!
//! Input is checked in four independent passes, and any one of them matching blocks the input:
//! 1. **Exact word**: every normal form of a word (see [`normalize`]) is looked up in the corpus.
//! 2. **Substring**: every normal form is scanned for blocked tokens of at least four letters, so
//!    compounds like `dumbass` are caught while `class` and `title` are not.
//! 3. **Evasion**: runs of three or more single-letter tokens, as in `f u c k`, are joined and
//!    scanned.
//! 4. **Phrase**: the whole input is searched for blocked phrases like `kill yourself`.
//!
//! Words on the allowlist skip both per-word passes.
//!
//! # Example
//! ```
//! use content_filter::{contains_violation, Stage};
//!
//! assert!(!contains_violation("Bless you, missionary of righteousness").is_blocked());
//!
//! let verdict = contains_violation("f u c k");
//! assert!(verdict.is_blocked());
//! assert_eq!(verdict.stage, Stage::Evasion);
//! ```

mod allowlist;
mod builder;
mod config;
mod corpus;
mod flags;
mod matcher;
mod verdict;

pub mod lexicon;
pub mod normalize;

pub use allowlist::Allowlist;
pub use builder::ContentFilterBuilder;
pub use config::Thresholds;
pub use corpus::Corpus;
pub use flags::Passes;
pub use verdict::{Stage, Verdict};

use matcher::Matcher;
use normalize::{spaced, LeetTable, Variants};
use once_cell::sync::Lazy;
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

/// The bundled filter, built on first use.
static DEFAULT_FILTER: Lazy<ContentFilter> = Lazy::new(|| ContentFilterBuilder::bundled().build());

/// A filter for checking text against a blocked-term corpus.
///
/// Built with a [`ContentFilterBuilder`]. Once built, a `ContentFilter` is immutable and can be
/// shared freely between threads.
#[derive(Clone, Debug)]
pub struct ContentFilter {
    pub(crate) matcher: Matcher,
    pub(crate) allowlist: Allowlist,
    pub(crate) leet: LeetTable,
    pub(crate) passes: Passes,
}

impl ContentFilter {
    /// Check whether `input` must be blocked.
    ///
    /// Returns `true` if any enabled pass matches, and `false` otherwise.
    ///
    /// # Example
    /// ```
    /// use content_filter::ContentFilter;
    ///
    /// let filter = ContentFilter::default();
    ///
    /// assert!(filter.check("you are a b!tch"));
    /// assert!(!filter.check("I love my church family"));
    /// ```
    #[inline]
    pub fn check(&self, input: &str) -> bool {
        self.classify(input).blocked
    }

    /// Classify `input`, reporting which pass matched and what it matched.
    ///
    /// Input longer than the configured maximum is truncated on a grapheme boundary before any
    /// pass runs, which the returned [`Verdict`] records.
    ///
    /// # Example
    /// ```
    /// use content_filter::{ContentFilter, Stage};
    ///
    /// let filter = ContentFilter::default();
    /// let verdict = filter.classify("You are so stup1d");
    ///
    /// assert!(verdict.blocked);
    /// assert_eq!(verdict.stage, Stage::ExactWord);
    /// assert_eq!(verdict.matched_term.as_deref(), Some("stupid"));
    /// ```
    pub fn classify(&self, input: &str) -> Verdict {
        let max_input_len = self.matcher.thresholds().max_input_len();
        let (text, truncated) = truncate(input, max_input_len);
        if truncated {
            warn!(
                input_bytes = input.len(),
                kept_bytes = text.len(),
                max_graphemes = max_input_len,
                "truncated oversized input"
            );
        }

        let mut verdict = self.classify_text(text);
        verdict.truncated = truncated;
        if verdict.blocked {
            debug!(
                stage = %verdict.stage,
                term = verdict.matched_term.as_deref().unwrap_or_default(),
                "blocked input"
            );
        }
        verdict
    }

    fn classify_text(&self, text: &str) -> Verdict {
        if self.passes.intersects(Passes::WORDS) {
            for word in text.split_whitespace() {
                if let Some(verdict) = self.classify_word(word) {
                    return verdict;
                }
            }
        }

        if self.passes.contains(Passes::EVASION) {
            if let Some(term) = self.matcher.evasion(text.split_whitespace()) {
                return Verdict::blocked(Stage::Evasion, term);
            }
        }

        if self.passes.contains(Passes::PHRASE) {
            if let Some(phrase) = self.matcher.phrase(&spaced(text)) {
                return Verdict::blocked(Stage::Phrase, phrase);
            }
        }

        Verdict::clean()
    }

    fn classify_word(&self, word: &str) -> Option<Verdict> {
        let variants = Variants::of(word, &self.leet);
        if variants.is_empty() || self.allowlist.is_safe(variants.stripped()) {
            return None;
        }

        if self.passes.contains(Passes::EXACT_WORD) {
            if let Some(term) = self.matcher.exact_word(&variants) {
                return Some(Verdict::blocked(Stage::ExactWord, term));
            }
        }

        if self.passes.contains(Passes::SUBSTRING) {
            if let Some(term) = self.matcher.substring(&variants) {
                return Some(Verdict::blocked(Stage::Substring, term));
            }
        }

        None
    }

    /// The blocked-term corpus this filter matches against.
    #[inline]
    pub fn corpus(&self) -> &Corpus {
        self.matcher.corpus()
    }

    /// The words exempt from the per-word passes.
    #[inline]
    pub fn allowlist(&self) -> &Allowlist {
        &self.allowlist
    }

    /// The length limits applied while matching.
    #[inline]
    pub fn thresholds(&self) -> Thresholds {
        self.matcher.thresholds()
    }

    /// The detection passes this filter runs.
    #[inline]
    pub fn passes(&self) -> Passes {
        self.passes
    }
}

impl Default for ContentFilter {
    /// Build a filter from the bundled lexicon.
    ///
    /// This builds a new corpus on every call. Prefer [`default_filter()`] unless a separate copy is
    /// needed.
    fn default() -> Self {
        ContentFilterBuilder::bundled().build()
    }
}

/// Keep at most `max` grapheme clusters of `input`.
fn truncate(input: &str, max: usize) -> (&str, bool) {
    // A string has no more graphemes than bytes.
    if input.len() <= max {
        return (input, false);
    }
    match input.grapheme_indices(true).nth(max) {
        Some((end, _)) => (&input[..end], true),
        None => (input, false),
    }
}

/// The shared filter built from the bundled lexicon.
///
/// The filter is built on the first call; concurrent first callers wait for the same build rather
/// than building their own.
pub fn default_filter() -> &'static ContentFilter {
    &DEFAULT_FILTER
}

/// Classify `text` with the [`default_filter()`].
///
/// # Example
/// ```
/// use content_filter::contains_violation;
///
/// assert!(contains_violation("kill yourself").is_blocked());
/// assert!(!contains_violation("").is_blocked());
/// ```
pub fn contains_violation(text: &str) -> Verdict {
    default_filter().classify(text)
}

#[cfg(test)]
mod tests {
    use crate::{truncate, ContentFilter, ContentFilterBuilder, Passes, Stage, Thresholds};

    fn filter() -> ContentFilter {
        ContentFilterBuilder::new()
            .roots(&["fuck", "ass", "tit", "dumbass", "kill"])
            .suffixes(&["", "s", "es", "ing", "er"])
            .safe_words(&["class", "title", "assistant"])
            .phrases(&["your mom", "kill yourself"])
            .aliases(vec![('4', 'a'), ('1', 'i'), ('(', 'c')])
            .build()
    }

    #[test]
    fn check() {
        assert!(filter().check("fuck"));
        assert!(!filter().check("grace"));
    }

    #[test]
    fn exact_word() {
        let verdict = filter().classify("what an ass");

        assert_eq!(verdict.stage, Stage::ExactWord);
        assert_eq!(verdict.matched_term.as_deref(), Some("ass"));
    }

    #[test]
    fn substring() {
        let verdict = filter().classify("fuckoff");

        assert_eq!(verdict.stage, Stage::Substring);
        assert_eq!(verdict.matched_term.as_deref(), Some("fuck"));
    }

    #[test]
    fn evasion() {
        let verdict = filter().classify("well f u c k");

        assert_eq!(verdict.stage, Stage::Evasion);
        assert_eq!(verdict.matched_term.as_deref(), Some("fuck"));
    }

    #[test]
    fn phrase() {
        let verdict = filter().classify("Your mom!");

        assert_eq!(verdict.stage, Stage::Phrase);
        assert_eq!(verdict.matched_term.as_deref(), Some("your mom"));
    }

    #[test]
    fn clean() {
        let verdict = filter().classify("a b c");

        assert!(!verdict.blocked);
        assert_eq!(verdict.stage, Stage::None);
        assert_eq!(verdict.matched_term, None);
    }

    #[test]
    fn word_passes_run_before_phrases() {
        assert_eq!(filter().classify("kill yourself").stage, Stage::ExactWord);
    }

    #[test]
    fn allowlist_skips_word_passes() {
        assert!(!filter().check("class"));
        assert!(!filter().check("assistant"));
        assert!(filter().check("classes"));
    }

    #[test]
    fn allowlist_is_per_word() {
        assert!(filter().check("class ass"));
    }

    #[test]
    fn allowlist_does_not_suppress_phrases() {
        let filter = ContentFilterBuilder::new()
            .phrase("class clown")
            .safe_word("class")
            .build();

        assert!(filter.check("class clown"));
    }

    #[test]
    fn leet() {
        assert!(filter().check("fu(k"));
        assert!(!filter().check("d1ck4ss"));
        assert!(filter().check("dumb4ss"));
    }

    #[test]
    fn disabled_passes() {
        let filter = ContentFilterBuilder::new()
            .root("fuck")
            .phrase("your mom")
            .passes(Passes::EXACT_WORD | Passes::PHRASE)
            .build();

        assert!(filter.check("fuck"));
        assert!(!filter.check("fuckoff"));
        assert!(!filter.check("f u c k"));
        assert!(filter.check("your mom"));
    }

    #[test]
    fn substring_only() {
        let filter = ContentFilterBuilder::new()
            .root("fuck")
            .passes(Passes::SUBSTRING)
            .build();

        assert!(!filter.check("fuck"));
        assert!(filter.check("fuckoff"));
    }

    #[test]
    fn empty_input() {
        assert!(!filter().check(""));
        assert!(!filter().check("   \t\n"));
        assert!(!filter().check("!!! ???"));
    }

    #[test]
    fn non_latin_input() {
        assert!(!filter().check("Привет, как дела?"));
        assert!(!filter().check("你好"));
    }

    #[test]
    fn truncates_oversized_input() {
        let filter = ContentFilterBuilder::new()
            .root("fuck")
            .thresholds(Thresholds::DEFAULT.with_max_input_len(10))
            .build();

        let verdict = filter.classify("hello there fuck");
        assert!(!verdict.blocked);
        assert!(verdict.truncated);

        let verdict = filter.classify("fuck");
        assert!(verdict.blocked);
        assert!(!verdict.truncated);
    }

    #[test]
    fn truncate_on_grapheme_boundary() {
        assert_eq!(truncate("abc", 3), ("abc", false));
        assert_eq!(truncate("abcd", 3), ("abc", true));
        assert_eq!(truncate("a\u{303}b\u{303}c", 2), ("a\u{303}b\u{303}", true));
        assert_eq!(truncate("\u{e3}\u{e3}\u{e3}", 3), ("\u{e3}\u{e3}\u{e3}", false));
    }
}

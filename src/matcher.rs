//! The detection passes.
//!
//! A [`Matcher`] owns the read-only tables the passes consult and exposes one method per pass. Each
//! pass is independent: it either reports the term that matched or nothing. Deciding which passes
//! run, and in what order, is left to the [`ContentFilter`].
//!
//! [`ContentFilter`]: crate::ContentFilter

use crate::{
    config::Thresholds,
    corpus::Corpus,
    normalize::{collapse_runs, spaced, Variants},
};

/// Blocked multi-word phrases, matched as plain substrings of a message's spaced form.
///
/// A phrase given with a leading or trailing space keeps that space, and the searched text is
/// padded with a space on each side. That lets a phrase pin either end to a word boundary, so
/// ` f u ` is not found in ` of us `, while `your mom` is still found in ` your moms are `.
#[derive(Clone, Debug, Default)]
pub(crate) struct Phrases {
    phrases: Vec<String>,
}

impl Phrases {
    pub(crate) fn new<I>(phrases: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for phrase in phrases {
            let phrase = phrase.as_ref();
            let core = spaced(phrase);
            if core.is_empty() {
                continue;
            }
            let leading = if phrase.starts_with(char::is_whitespace) { " " } else { "" };
            let trailing = if phrase.ends_with(char::is_whitespace) { " " } else { "" };
            let phrase = format!("{}{}{}", leading, core, trailing);
            if !normalized.contains(&phrase) {
                normalized.push(phrase);
            }
        }
        Self {
            phrases: normalized,
        }
    }

    /// Find the first phrase occurring in `text`, which must already be padded.
    fn find(&self, text: &str) -> Option<&str> {
        self.phrases
            .iter()
            .find(|phrase| text.contains(phrase.as_str()))
            .map(|phrase| phrase.trim())
    }

    pub(crate) fn len(&self) -> usize {
        self.phrases.len()
    }
}

/// Consecutive single-letter tokens seen so far.
#[derive(Debug, Default)]
struct Run {
    letters: String,
}

impl Run {
    fn push(&mut self, letter: char) {
        self.letters.push(letter);
    }

    /// Number of tokens in the run. Every token contributes exactly one ASCII letter.
    fn len(&self) -> usize {
        self.letters.len()
    }

    fn clear(&mut self) {
        self.letters.clear();
    }
}

/// Returns the letter `token` normalizes to, if it normalizes to exactly one letter.
fn single_letter(token: &str) -> Option<char> {
    let mut letters = token
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase);
    match (letters.next(), letters.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Matcher {
    corpus: Corpus,
    phrases: Phrases,
    thresholds: Thresholds,
}

impl Matcher {
    pub(crate) fn new(corpus: Corpus, phrases: Phrases, thresholds: Thresholds) -> Self {
        Self {
            corpus,
            phrases,
            thresholds,
        }
    }

    #[inline]
    pub(crate) fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[inline]
    pub(crate) fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Exact-token pass: the first form of a word that is itself a blocked token.
    pub(crate) fn exact_word<'a>(&self, variants: &'a Variants) -> Option<&'a str> {
        variants.iter().find(|form| self.corpus.contains(form))
    }

    /// Substring pass: the first blocked token found strictly inside one of a word's forms.
    ///
    /// Windows range from the substring floor up to one less than the form's length. Whole forms
    /// are the exact-token pass's concern.
    pub(crate) fn substring<'a>(&self, variants: &'a Variants) -> Option<&'a str> {
        let min = self.thresholds.min_substring_len();
        variants
            .iter()
            .filter(|form| form.len() > min)
            .find_map(|form| self.corpus.scan(form, min, form.len() - 1))
    }

    /// Character-run evasion pass over a message's whitespace-separated tokens.
    ///
    /// Runs of single-letter tokens are joined once they end, either at the first token that is
    /// not a single letter or at the end of the input. Runs shorter than the run floor are
    /// dropped. A joined run is scanned both as written and with repeated letters collapsed.
    pub(crate) fn evasion<'a, I>(&self, tokens: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut run = Run::default();
        for token in tokens {
            match single_letter(token) {
                Some(letter) => run.push(letter),
                None => {
                    if let Some(term) = self.flush(&mut run) {
                        return Some(term);
                    }
                }
            }
        }
        self.flush(&mut run)
    }

    fn flush(&self, run: &mut Run) -> Option<String> {
        let found = if run.len() >= self.thresholds.min_run_len() {
            let min = self.thresholds.min_run_len();
            let max = self.thresholds.max_run_window();
            self.corpus
                .scan(&run.letters, min, max)
                .map(ToOwned::to_owned)
                .or_else(|| {
                    self.corpus
                        .scan(&collapse_runs(&run.letters), min, max)
                        .map(ToOwned::to_owned)
                })
        } else {
            None
        };
        run.clear();
        found
    }

    /// Phrase pass over a message already normalized with [`spaced`].
    pub(crate) fn phrase(&self, spaced_text: &str) -> Option<&str> {
        if spaced_text.is_empty() || self.phrases.phrases.is_empty() {
            return None;
        }
        self.phrases.find(&format!(" {} ", spaced_text))
    }
}

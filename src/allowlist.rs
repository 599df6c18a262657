//! Exemptions for legitimate words containing blocked terms.

use crate::normalize::strip_non_letters;
use hashbrown::HashSet;

/// Words that are never flagged, even though they contain a blocked term.
///
/// Lookups are exact. The allowlist is consulted per word, on the word's stripped form, before any
/// matching is attempted on that word: `class` is exempt, but `ass` and `classass` are not.
#[derive(Clone, Debug, Default)]
pub struct Allowlist {
    words: HashSet<String>,
}

impl Allowlist {
    /// Create an allowlist from `words`, normalizing each with [`strip_non_letters`].
    ///
    /// Words that normalize to an empty string are dropped.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| strip_non_letters(word.as_ref()))
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Returns whether the stripped word `word` is exempt.
    #[inline]
    pub fn is_safe(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

use crate::{
    allowlist::Allowlist,
    config::Thresholds,
    corpus::Corpus,
    flags::Passes,
    lexicon,
    matcher::{Matcher, Phrases},
    normalize::LeetTable,
    ContentFilter,
};
use tracing::debug;

/// A builder for a [`ContentFilter`].
///
/// Every input is normalized when the filter is built, so entries may be given in any case and
/// with punctuation. Entries that normalize to nothing are dropped.
///
/// # Example
/// ```
/// use content_filter::ContentFilterBuilder;
///
/// let filter = ContentFilterBuilder::new()
///     .roots(&["foo"])
///     .suffixes(&["", "s", "ing"])
///     .safe_word("foodie")
///     .phrase("go away")
///     .build();
///
/// assert!(filter.check("foos"));
/// assert!(!filter.check("foodie"));
/// assert!(filter.check("please go away"));
/// ```
#[derive(Clone, Debug)]
pub struct ContentFilterBuilder {
    roots: Vec<String>,
    suffixes: Vec<String>,
    safe_words: Vec<String>,
    phrases: Vec<String>,
    aliases: Vec<(char, char)>,
    thresholds: Thresholds,
    passes: Passes,
}

impl ContentFilterBuilder {
    /// Create an empty builder.
    ///
    /// A filter built from an empty builder blocks nothing. Note that no leet-speak substitutions
    /// are included either; use [`bundled()`](Self::bundled) to start from the shipped lexicon.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            roots: Vec::new(),
            suffixes: Vec::new(),
            safe_words: Vec::new(),
            phrases: Vec::new(),
            aliases: Vec::new(),
            thresholds: Thresholds::DEFAULT,
            passes: Passes::all(),
        }
    }

    /// Create a builder pre-loaded with the bundled [`lexicon`].
    #[must_use]
    pub fn bundled() -> Self {
        let mut builder = Self::new();
        builder
            .roots(lexicon::roots())
            .suffixes(lexicon::SUFFIXES)
            .safe_words(lexicon::SAFE_WORDS)
            .phrases(lexicon::BLOCKED_PHRASES)
            .aliases(lexicon::LEET.iter().copied());
        builder
    }

    #[inline]
    pub fn root<S>(&mut self, root: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.roots.push(root.to_string());
        self
    }

    #[inline]
    pub fn roots<I, S>(&mut self, roots: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.roots.extend(roots.into_iter().map(|s| s.to_string()));
        self
    }

    #[inline]
    pub fn suffix<S>(&mut self, suffix: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.suffixes.push(suffix.to_string());
        self
    }

    #[inline]
    pub fn suffixes<I, S>(&mut self, suffixes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.suffixes
            .extend(suffixes.into_iter().map(|s| s.to_string()));
        self
    }

    #[inline]
    pub fn safe_word<S>(&mut self, safe_word: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.safe_words.push(safe_word.to_string());
        self
    }

    #[inline]
    pub fn safe_words<I, S>(&mut self, safe_words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.safe_words
            .extend(safe_words.into_iter().map(|s| s.to_string()));
        self
    }

    #[inline]
    pub fn phrase<S>(&mut self, phrase: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.phrases.push(phrase.to_string());
        self
    }

    #[inline]
    pub fn phrases<I, S>(&mut self, phrases: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.phrases
            .extend(phrases.into_iter().map(|s| s.to_string()));
        self
    }

    /// Decode `stand_in` as `letter` when computing de-leeted forms.
    #[inline]
    pub fn alias(&mut self, stand_in: char, letter: char) -> &mut Self {
        self.aliases.push((stand_in, letter));
        self
    }

    #[inline]
    pub fn aliases<I>(&mut self, aliases: I) -> &mut Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        self.aliases.extend(aliases);
        self
    }

    #[inline]
    pub fn thresholds(&mut self, thresholds: Thresholds) -> &mut Self {
        self.thresholds = thresholds;
        self
    }

    #[inline]
    pub fn passes(&mut self, passes: Passes) -> &mut Self {
        self.passes = passes;
        self
    }

    /// Build the [`ContentFilter`].
    ///
    /// This expands every root with every suffix, so it does work proportional to their product.
    /// Build once and share the result; [`default_filter()`](crate::default_filter) does this for
    /// the bundled lexicon.
    pub fn build(&self) -> ContentFilter {
        let corpus = Corpus::build(&self.roots, &self.suffixes);
        let phrases = Phrases::new(&self.phrases);
        let allowlist = Allowlist::new(&self.safe_words);
        let leet = LeetTable::new(self.aliases.iter().copied());

        debug!(
            safe_words = allowlist.len(),
            phrases = phrases.len(),
            aliases = leet.len(),
            passes = ?self.passes,
            "built content filter"
        );

        ContentFilter {
            matcher: Matcher::new(corpus, phrases, self.thresholds),
            allowlist,
            leet,
            passes: self.passes,
        }
    }
}

impl Default for ContentFilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

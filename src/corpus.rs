//! The blocked-term corpus.
//!
//! A [`Corpus`] is the set of every normalized token the filter blocks. It is expanded once from a
//! list of root terms and a list of suffixes, and is read-only afterward.

use crate::normalize::strip_non_letters;
use hashbrown::HashSet;
use tracing::debug;

/// The set of blocked normalized tokens.
///
/// Contains `strip_non_letters(root)` and `strip_non_letters(root + suffix)` for every root and
/// suffix it was built from. Roots that normalize to an empty string are skipped entirely, so a
/// suffix never becomes a blocked token on its own.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    terms: HashSet<String>,
    longest: usize,
}

impl Corpus {
    /// Expand `roots` with every one of `suffixes`.
    ///
    /// # Example
    /// ```
    /// use content_filter::Corpus;
    ///
    /// let corpus = Corpus::build(&["foo"], &["", "s", "ing"]);
    ///
    /// assert!(corpus.contains("foo"));
    /// assert!(corpus.contains("foos"));
    /// assert!(corpus.contains("fooing"));
    /// assert_eq!(corpus.len(), 3);
    /// ```
    pub fn build<R, S>(roots: R, suffixes: S) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let suffixes = suffixes
            .into_iter()
            .map(|suffix| strip_non_letters(suffix.as_ref()))
            .collect::<Vec<_>>();

        let mut corpus = Self::default();
        let mut root_count = 0;
        for root in roots {
            let root = strip_non_letters(root.as_ref());
            if root.is_empty() {
                continue;
            }
            root_count += 1;
            for suffix in &suffixes {
                if !suffix.is_empty() {
                    corpus.insert(root.clone() + suffix);
                }
            }
            corpus.insert(root);
        }

        debug!(
            roots = root_count,
            suffixes = suffixes.len(),
            entries = corpus.len(),
            longest = corpus.longest,
            "built blocked-term corpus"
        );
        corpus
    }

    fn insert(&mut self, term: String) {
        self.longest = self.longest.max(term.len());
        self.terms.insert(term);
    }

    /// Returns whether `term` is blocked.
    ///
    /// `term` is expected to already be normalized. No normalization is performed here.
    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Length of the longest blocked token.
    ///
    /// No window longer than this can ever match, which bounds substring scanning.
    #[inline]
    pub fn longest(&self) -> usize {
        self.longest
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Find the first blocked window of `text` whose length lies within `min..=max`.
    ///
    /// Windows are tried shortest first, and left to right within each length. `text` must be
    /// ASCII, as every normalized form is.
    pub fn scan<'a>(&self, text: &'a str, min: usize, max: usize) -> Option<&'a str> {
        debug_assert!(text.is_ascii());
        let max = max.min(text.len()).min(self.longest);
        (min.max(1)..=max).find_map(|size| {
            (0..=text.len() - size)
                .map(|start| &text[start..start + size])
                .find(|window| self.contains(window))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::corpus::Corpus;

    #[test]
    fn roots_are_included() {
        let corpus = Corpus::build(&["foo", "bar"], &[] as &[&str]);

        assert!(corpus.contains("foo"));
        assert!(corpus.contains("bar"));
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn suffixes_expand_every_root() {
        let corpus = Corpus::build(&["foo", "bar"], &["s", "ed"]);

        for term in &["foo", "foos", "fooed", "bar", "bars", "bared"] {
            assert!(corpus.contains(term), "{}", term);
        }
        assert_eq!(corpus.len(), 6);
    }

    #[test]
    fn entries_are_normalized() {
        let corpus = Corpus::build(&["Camel Jockey", "f.o.o"], &["-S"]);

        assert!(corpus.contains("cameljockey"));
        assert!(corpus.contains("cameljockeys"));
        assert!(corpus.contains("foo"));
        assert!(!corpus.contains("camel jockey"));
    }

    #[test]
    fn empty_roots_are_skipped() {
        let corpus = Corpus::build(&["123", ""], &["", "s"]);

        assert!(corpus.is_empty());
        assert!(!corpus.contains("s"));
    }

    #[test]
    fn duplicates_are_merged() {
        let corpus = Corpus::build(&["foo", "FOO", "fo"], &["", "o"]);

        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn longest() {
        let corpus = Corpus::build(&["a", "abc"], &["", "head"]);

        assert_eq!(corpus.longest(), 7);
        assert_eq!(Corpus::default().longest(), 0);
    }

    #[test]
    fn scan_finds_shortest_first() {
        let corpus = Corpus::build(&["bar", "foobar"], &[] as &[&str]);

        assert_eq!(corpus.scan("xfoobarx", 3, 8), Some("bar"));
        assert_eq!(corpus.scan("xfoobarx", 4, 8), Some("foobar"));
    }

    #[test]
    fn scan_respects_bounds() {
        let corpus = Corpus::build(&["foo"], &[] as &[&str]);

        assert_eq!(corpus.scan("foo", 4, 10), None);
        assert_eq!(corpus.scan("foo", 1, 2), None);
        assert_eq!(corpus.scan("foo", 3, 3), Some("foo"));
    }

    #[test]
    fn scan_short_text() {
        let corpus = Corpus::build(&["foo"], &[] as &[&str]);

        assert_eq!(corpus.scan("", 1, 20), None);
        assert_eq!(corpus.scan("fo", 1, 20), None);
    }
}

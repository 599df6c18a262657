//! Tunable limits for matching.

use const_fn_assert::cfn_assert;

/// Length limits applied while matching.
///
/// The defaults were tuned against false positives in everyday vocabulary. Raising
/// `min_substring_len` trades recall for precision; the allowlist is the preferred tool for
/// individual false positives.
///
/// All constructors are `const`, so a filter's limits can be fixed at compile time:
///
/// ```
/// use content_filter::Thresholds;
///
/// const STRICT: Thresholds = Thresholds::DEFAULT.with_min_substring_len(3);
///
/// assert_eq!(STRICT.min_substring_len(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Thresholds {
    min_substring_len: usize,
    min_run_len: usize,
    max_run_window: usize,
    max_input_len: usize,
}

impl Thresholds {
    /// Substring floor 4, run floor 3, run window 20, and input cap of 20 000 graphemes.
    pub const DEFAULT: Self = Self::new(4, 3, 20, 20_000);

    /// Create a new set of thresholds.
    ///
    /// - `min_substring_len`: shortest window scanned inside a word. Must be at least 1.
    /// - `min_run_len`: how many consecutive single-letter tokens form an evasion run, and the
    ///   shortest window scanned over that run. Must be at least 2.
    /// - `max_run_window`: longest window scanned over an evasion run. Must be at least
    ///   `min_run_len`.
    /// - `max_input_len`: graphemes kept before the rest of the input is discarded. Must be at
    ///   least 1.
    ///
    /// Violating these invariants fails compilation when evaluated in a `const` context, and panics
    /// otherwise.
    pub const fn new(
        min_substring_len: usize,
        min_run_len: usize,
        max_run_window: usize,
        max_input_len: usize,
    ) -> Self {
        cfn_assert!(min_substring_len >= 1);
        cfn_assert!(min_run_len >= 2);
        cfn_assert!(max_run_window >= min_run_len);
        cfn_assert!(max_input_len >= 1);

        Self {
            min_substring_len,
            min_run_len,
            max_run_window,
            max_input_len,
        }
    }

    #[must_use]
    pub const fn with_min_substring_len(self, min_substring_len: usize) -> Self {
        Self::new(
            min_substring_len,
            self.min_run_len,
            self.max_run_window,
            self.max_input_len,
        )
    }

    #[must_use]
    pub const fn with_min_run_len(self, min_run_len: usize) -> Self {
        Self::new(
            self.min_substring_len,
            min_run_len,
            self.max_run_window,
            self.max_input_len,
        )
    }

    #[must_use]
    pub const fn with_max_run_window(self, max_run_window: usize) -> Self {
        Self::new(
            self.min_substring_len,
            self.min_run_len,
            max_run_window,
            self.max_input_len,
        )
    }

    #[must_use]
    pub const fn with_max_input_len(self, max_input_len: usize) -> Self {
        Self::new(
            self.min_substring_len,
            self.min_run_len,
            self.max_run_window,
            max_input_len,
        )
    }

    #[inline]
    pub const fn min_substring_len(&self) -> usize {
        self.min_substring_len
    }

    #[inline]
    pub const fn min_run_len(&self) -> usize {
        self.min_run_len
    }

    #[inline]
    pub const fn max_run_window(&self) -> usize {
        self.max_run_window
    }

    #[inline]
    pub const fn max_input_len(&self) -> usize {
        self.max_input_len
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Thresholds;

    #[test]
    fn defaults() {
        let thresholds = Thresholds::default();

        assert_eq!(thresholds.min_substring_len(), 4);
        assert_eq!(thresholds.min_run_len(), 3);
        assert_eq!(thresholds.max_run_window(), 20);
        assert_eq!(thresholds.max_input_len(), 20_000);
    }

    #[test]
    fn with_methods() {
        const THRESHOLDS: Thresholds = Thresholds::DEFAULT
            .with_min_substring_len(5)
            .with_min_run_len(4)
            .with_max_run_window(8)
            .with_max_input_len(100);

        assert_eq!(THRESHOLDS, Thresholds::new(5, 4, 8, 100));
    }

    #[test]
    #[should_panic]
    fn zero_substring_len() {
        let _ = Thresholds::DEFAULT.with_min_substring_len(0);
    }

    #[test]
    #[should_panic]
    fn run_window_below_run_len() {
        let _ = Thresholds::DEFAULT.with_max_run_window(2);
    }

    #[test]
    #[should_panic]
    fn zero_input_len() {
        let _ = Thresholds::new(4, 3, 20, 0);
    }
}

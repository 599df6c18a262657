//! Classification results.

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The pass that blocked an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stage {
    /// Nothing matched.
    None,
    /// A word's normal form was a blocked token.
    ExactWord,
    /// A blocked token was found inside a word.
    Substring,
    /// A blocked token was spelled out in single-letter tokens.
    Evasion,
    /// A blocked phrase was found in the whole input.
    Phrase,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::None => "none",
            Stage::ExactWord => "exact_word",
            Stage::Substring => "substring",
            Stage::Evasion => "evasion",
            Stage::Phrase => "phrase",
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::None
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of classifying one input.
///
/// Carries enough detail to log a moderation decision without classifying again. Hosts that only
/// need a yes or no can use [`is_blocked()`] or convert into a `bool`.
///
/// [`is_blocked()`]: Verdict::is_blocked
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Verdict {
    /// Whether the input must be rejected.
    pub blocked: bool,
    /// The pass that matched, or [`Stage::None`].
    pub stage: Stage,
    /// The normalized corpus entry or phrase that matched.
    pub matched_term: Option<String>,
    /// Whether the input was cut short by the size guard before being checked.
    pub truncated: bool,
}

impl Verdict {
    /// A verdict for input that matched nothing.
    #[must_use]
    pub fn clean() -> Self {
        Self::default()
    }

    /// A verdict for input blocked at `stage` by `term`.
    #[must_use]
    pub fn blocked<S>(stage: Stage, term: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            blocked: true,
            stage,
            matched_term: Some(term.into()),
            truncated: false,
        }
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> bool {
        verdict.blocked
    }
}

#[cfg(test)]
mod tests {
    use crate::verdict::{Stage, Verdict};

    #[test]
    fn clean() {
        let verdict = Verdict::clean();

        assert!(!verdict.is_blocked());
        assert_eq!(verdict.stage, Stage::None);
        assert_eq!(verdict.matched_term, None);
        assert!(!bool::from(verdict));
    }

    #[test]
    fn blocked() {
        let verdict = Verdict::blocked(Stage::Phrase, "go die");

        assert!(verdict.is_blocked());
        assert_eq!(verdict.stage, Stage::Phrase);
        assert_eq!(verdict.matched_term.as_deref(), Some("go die"));
        assert!(bool::from(verdict));
    }

    #[test]
    fn stage_display() {
        assert_eq!(Stage::ExactWord.to_string(), "exact_word");
        assert_eq!(Stage::Evasion.to_string(), "evasion");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize() {
        let verdict = Verdict::blocked(Stage::Substring, "fuck");

        assert_eq!(
            serde_json::to_string(&verdict).unwrap(),
            r#"{"blocked":true,"stage":"substring","matched_term":"fuck","truncated":false}"#
        );
    }
}

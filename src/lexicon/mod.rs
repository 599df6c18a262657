//! The bundled lexicon.
//!
//! These tables are compiled into the crate and loaded by [`ContentFilterBuilder::bundled()`].
//! Changing what the bundled filter blocks means editing these tables and shipping a new build.
//!
//! [`ContentFilterBuilder::bundled()`]: crate::ContentFilterBuilder::bundled

mod phrases;
mod roots;
mod safe_words;

pub use phrases::BLOCKED_PHRASES;
pub use roots::{
    BLASPHEMY, BULLYING, CATEGORIES, DRUGS, HATE, MISC, PROFANITY, SEXUAL, SLURS, VIOLENCE,
};
pub use safe_words::SAFE_WORDS;

/// Suffixes appended to every root when the corpus is built.
///
/// The empty suffix is listed for completeness; roots are always included on their own.
pub const SUFFIXES: &[&str] = &[
    "", "s", "es", "ed", "er", "ers", "ing", "ings", "tion", "sion", "ment", "ness", "ous", "ious",
    "eous", "ful", "less", "ish", "ism", "ist", "ists", "ize", "ise", "ized", "ised", "izing",
    "ising", "able", "ible", "ly", "ty", "ity", "al", "ial", "ual", "y", "ey", "ie", "ee", "o", "a",
    "ah", "as", "os", "head", "face", "bag", "hole", "wad", "monger", "tard",
];

/// Leet-speak stand-ins and the letters they decode to.
pub const LEET: &[(char, char)] = &[
    ('0', 'o'),
    ('1', 'i'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('7', 't'),
    ('8', 'b'),
    ('9', 'g'),
    ('6', 'b'),
    ('@', 'a'),
    ('$', 's'),
    ('!', 'i'),
    ('+', 't'),
    ('<', 'c'),
    ('(', 'c'),
    ('|', 'l'),
    ('{', 'c'),
    ('~', 'n'),
];

/// Iterate over every bundled root term, across all categories.
pub fn roots() -> impl Iterator<Item = &'static str> {
    CATEGORIES
        .iter()
        .flat_map(|(_, roots)| roots.iter().copied())
}

#[cfg(test)]
mod tests {
    use crate::lexicon::{roots, BLOCKED_PHRASES, CATEGORIES, LEET, SAFE_WORDS, SUFFIXES};

    #[test]
    fn roots_cover_every_category() {
        let total: usize = CATEGORIES.iter().map(|(_, roots)| roots.len()).sum();

        assert_eq!(CATEGORIES.len(), 9);
        assert_eq!(roots().count(), total);
    }

    #[test]
    fn roots_are_lowercase() {
        for root in roots() {
            assert!(
                root.chars().all(|c| c.is_ascii_lowercase() || c == ' '),
                "{:?}",
                root
            );
        }
    }

    #[test]
    fn phrases_are_normalized() {
        for phrase in BLOCKED_PHRASES {
            assert_eq!(crate::normalize::spaced(phrase), phrase.trim(), "{:?}", phrase);
            assert!(!phrase.starts_with("  ") && !phrase.ends_with("  "), "{:?}", phrase);
        }
    }

    #[test]
    fn safe_words_are_normalized() {
        for word in SAFE_WORDS {
            assert_eq!(crate::normalize::strip_non_letters(word), *word);
        }
    }

    #[test]
    fn suffixes_are_letters() {
        assert!(SUFFIXES.iter().all(|s| s.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn leet_decodes_to_letters() {
        assert_eq!(LEET.len(), 18);
        assert!(LEET.iter().all(|(_, to)| to.is_ascii_lowercase()));
    }
}

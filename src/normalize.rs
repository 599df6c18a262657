//! Text normalization.
//!
//! Every comparison the filter makes is between normalized forms. The transforms here are
//! independent of each other and never fail: input that normalizes to nothing simply produces an
//! empty `String`, which callers skip.
//!
//! Each transform defeats a different evasion technique:
//! - [`strip_non_letters`] removes case, punctuation, digits, and emoji.
//! - [`de_leet`] decodes symbol substitutions such as `sh!t` before they would be stripped.
//! - [`collapse_runs`] removes letter padding such as `fuuuuck`.
//!
//! A word is checked in all of the forms produced by combining these, gathered in [`Variants`].

use hashbrown::HashMap;

/// Lowercase `input` and remove every character outside `a`-`z`.
///
/// This is the base normal form, used both when building the corpus and when comparing words.
///
/// # Example
/// ```
/// use content_filter::normalize::strip_non_letters;
///
/// assert_eq!(strip_non_letters("F.o-O!"), "foo");
/// ```
pub fn strip_non_letters(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Lowercase `input`, decode leet-speak stand-ins using `table`, and strip what remains.
///
/// This must be given the original word, since stripping first would discard the digits and
/// symbols being decoded.
///
/// # Example
/// ```
/// use content_filter::normalize::{de_leet, LeetTable};
///
/// assert_eq!(de_leet("$h1t", &LeetTable::default()), "shit");
/// ```
pub fn de_leet(input: &str, table: &LeetTable) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| table.decode(c))
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Replace every run of identical consecutive characters with a single instance.
///
/// # Example
/// ```
/// use content_filter::normalize::collapse_runs;
///
/// assert_eq!(collapse_runs("fuuuuck"), "fuck");
/// ```
pub fn collapse_runs(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut last = None;
    for c in input.chars() {
        if last != Some(c) {
            output.push(c);
            last = Some(c);
        }
    }
    output
}

/// Lowercase `input`, keep only letters and whitespace, and join the words with single spaces.
///
/// This is the form used for phrase matching over a whole message.
///
/// # Example
/// ```
/// use content_filter::normalize::spaced;
///
/// assert_eq!(spaced("  Shut\tUP!! "), "shut up");
/// ```
pub fn spaced(input: &str) -> String {
    let letters: String = input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    let mut output = String::with_capacity(letters.len());
    for word in letters.split_whitespace() {
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(word);
    }
    output
}

/// A mapping from leet-speak stand-ins to the letters they represent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeetTable {
    aliases: HashMap<char, char>,
}

impl LeetTable {
    /// Create a table with no substitutions.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Create a table from `(stand_in, letter)` pairs.
    ///
    /// Stand-ins are lowercased, since decoding happens after lowercasing. A later pair replaces
    /// an earlier pair with the same stand-in.
    pub fn new<I>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut table = Self::empty();
        table.extend(aliases);
        table
    }

    /// The letter `c` stands for, or `c` itself if it is not a stand-in.
    #[inline]
    pub fn decode(&self, c: char) -> char {
        self.aliases.get(&c).copied().unwrap_or(c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for LeetTable {
    /// The bundled substitutions from [`lexicon::LEET`](crate::lexicon::LEET).
    fn default() -> Self {
        Self::new(crate::lexicon::LEET.iter().copied())
    }
}

impl Extend<(char, char)> for LeetTable {
    fn extend<I>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = (char, char)>,
    {
        for (stand_in, letter) in aliases {
            for lower in stand_in.to_lowercase() {
                self.aliases.insert(lower, letter.to_ascii_lowercase());
            }
        }
    }
}

/// The distinct non-empty normal forms of a single word.
///
/// Holds at most four forms: stripped, de-leeted, collapsed-stripped, and collapsed-de-leeted.
/// Forms that coincide are stored once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variants {
    stripped: String,
    forms: Vec<String>,
}

impl Variants {
    /// Compute the variants of `word`.
    pub fn of(word: &str, table: &LeetTable) -> Self {
        let stripped = strip_non_letters(word);
        let decoded = de_leet(word, table);
        let mut forms = Vec::with_capacity(4);
        let collapsed = collapse_runs(&stripped);
        let collapsed_decoded = collapse_runs(&decoded);
        for form in [stripped.clone(), decoded, collapsed, collapsed_decoded] {
            if !form.is_empty() && !forms.contains(&form) {
                forms.push(form);
            }
        }
        Self { stripped, forms }
    }

    /// The plain stripped form, which the allowlist is checked against.
    #[inline]
    pub fn stripped(&self) -> &str {
        &self.stripped
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

use bitflags::bitflags;

bitflags! {
    /// The detection passes a [`ContentFilter`] runs.
    ///
    /// Any enabled pass matching is enough to block the input. Disabling a pass only ever lets more
    /// input through.
    ///
    /// [`ContentFilter`]: crate::ContentFilter
    pub struct Passes: u8 {
        /// Look up each word's normal forms in the corpus.
        const EXACT_WORD = 0b0000_0001;
        /// Scan each word's normal forms for blocked substrings.
        const SUBSTRING = 0b0000_0010;
        /// Join runs of single-letter tokens, as in `f u c k`, and scan the result.
        const EVASION = 0b0000_0100;
        /// Look for blocked phrases across the whole input.
        const PHRASE = 0b0000_1000;

        /// Both per-word passes.
        const WORDS = Self::EXACT_WORD.bits() | Self::SUBSTRING.bits();
    }
}

impl Default for Passes {
    fn default() -> Self {
        Self::all()
    }
}

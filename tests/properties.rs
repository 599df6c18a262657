use content_filter::{
    contains_violation, default_filter, lexicon, ContentFilter, ContentFilterBuilder, Passes,
};
use once_cell::sync::Lazy;
use proptest::{prelude::*, sample};

static WORDS_ONLY: Lazy<ContentFilter> = Lazy::new(|| {
    ContentFilterBuilder::bundled()
        .passes(Passes::WORDS)
        .build()
});

#[test]
fn every_safe_word_is_allowed() {
    for word in lexicon::SAFE_WORDS {
        assert!(!default_filter().check(word), "{:?}", word);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn idempotent(text in any::<String>()) {
        prop_assert_eq!(contains_violation(&text), contains_violation(&text));
    }

    #[test]
    fn case_insensitive(text in "[a-zA-Z ]{0,40}") {
        prop_assert_eq!(
            contains_violation(&text.to_uppercase()),
            contains_violation(&text.to_lowercase())
        );
    }

    #[test]
    fn safe_words_survive_casing_and_punctuation(
        word in sample::select(lexicon::SAFE_WORDS),
        upper in any::<bool>(),
        punctuation in "[.,!?\"']{0,3}",
    ) {
        let word = if upper { word.to_uppercase() } else { word.to_owned() };
        let text = format!("{}{}", word, punctuation);

        prop_assert!(!default_filter().check(&text), "{:?}", text);
    }

    #[test]
    fn fewer_passes_never_block_more(text in "[a-z4@$1 ]{0,30}") {
        if WORDS_ONLY.check(&text) {
            prop_assert!(default_filter().check(&text));
        }
    }
}

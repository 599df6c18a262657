//! Multi-word phrases that are harmless word by word.

/// Phrases searched for as substrings of the whole message.
///
/// Entries are lowercase, letters only, and single-spaced. A leading or trailing space pins that
/// end of the phrase to a word boundary, so `" f you"` matches `f you` but not `of you`, and
/// `"fu "` matches `fu` but not `fun`. An unpinned end also matches inside a longer word, as
/// `"shut up"` does in `shut uppp`.
pub const BLOCKED_PHRASES: &[&str] = &[
    // self-harm
    "kill yourself", "kill urself", "kill ur self", "kill myself", " go die", "go kys",
    "u should die", "you should die", "hope you die", " end yourself", " end urself",
    "neck yourself", "neck urself", "drink bleach", " kms ", " kys ",
    // sexual
    "jerk off", "jack off ", "beat off ", "blow job", "hand job", " rim job",
    // hostility
    "shut up", "shutup", "piss off", "pissoff", "bugger off", "sod off", "screw you", "screw u ",
    " eff you", " eff u ", " ef u ", " f you", " f u ", " fk u ", " fk you", " fu ", " fku ",
    "suck my", "bite me", " eat me ", " eat my", "kiss my", " lick my",
    "your mom ", "your moms", "your momma", "your mommy", "yo mama", " ur mom ", " ur moms",
    " ur momma", " ya mom ", "your mother", "you suck", " u suck", "ya suck", " get lost",
    "drop dead", "i hate you", " i hate u ", "burn in hell", "rot in hell", "go to hell ",
    // isolation
    "no one likes you", "nobody likes you", "everyone hates you",
];

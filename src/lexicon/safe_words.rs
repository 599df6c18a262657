//! Ordinary words that contain a blocked term.
//!
//! A word listed here is never flagged on its own, whichever substitutions or repeated letters it
//! is written with. Entries are compared against the lowercase, letters-only form of each word, so
//! only exact words are exempted: `classes` is listed separately from `class`.

pub const SAFE_WORDS: &[&str] = &[
    // scripture and church life
    "bless", "blessed", "blessing", "blessings", "holy", "hebrews", "passover", "trespass",
    "trespasses", "trespassed", "mission", "missions", "missionary", "missionaries", "tithe",
    "tithes", "tithing", "righteous", "righteousness", "passage", "passages", "title", "titles",
    "titled", "masses", "ambassador", "ambassadors",
    // everyday words
    "hello", "class", "classes", "classic", "assist", "assisted", "assisting", "assistance",
    "assistant", "assistants", "assess", "assessment", "associate", "associated", "association",
    "passed", "passing", "embassy", "casserole", "lasso", "molasses", "shell", "shells",
    "shellfish", "scrapbook", "scrape", "scraped", "analysis", "analyst", "therapist",
    "therapists", "cocktail", "peacock", "cockpit", "cockroach", "grape", "grapes", "drape",
    "drapes", "studying", "something", "better", "difficult", "simple", "simply", "flame",
    "flames", "humility", "hospitality", "shoes", "skill", "skills", "skilled", "skillful",
    "shitake",
    // places and names
    "scunthorpe", "penistone", "hancock", "dickens", "dickinson", "michelle", "rochelle",
    "massachusetts",
];

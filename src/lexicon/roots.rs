//! Root terms, grouped by category.
//!
//! Categories are informational only. Every root is treated as a hard block.

/// General profanity and its common misspellings.
pub const PROFANITY: &[&str] = &[
    "fuck", "fuk", "fuc", "fck", "fuq", "fux", "phuck", "phuk", "phuc", "frig", "effing", "fking",
    "shit", "sht", "shite", "shyt", "shiznit", "bitch", "bich", "bytch", "biatch", "bioch",
    "beyotch", "ass", "arse", "arsehole", "asshole", "ahole", "azz", "damn", "dammit", "damnit",
    "dayum", "damm", "dick", "dik", "dck", "dickhead", "dikhead", "dickwad", "cock", "cok", "kok",
    "cawk", "cocksucker", "cunt", "cnt", "cvnt", "kunt", "crap", "krap", "piss", "pis", "turd",
    "trd", "hell", "hel", "bastard", "bstrd", "wank", "wanker", "wnker", "tosser", "toss", "twat",
    "twit", "bollocks", "bollock", "bullshit", "bugger", "bloody", "prick", "prik", "screw",
    "screwed", "suck", "suk", "succ", "sux", "blows", "stfu", "gtfo", "gfy", "lmfao", "omfg",
    "roflmao",
];

/// Racial, ethnic, and identity slurs.
pub const SLURS: &[&str] = &[
    "nigger", "nigga", "niga", "niger", "nigg", "ngga", "nikka", "nicca", "negro", "negr", "faggot",
    "fagot", "faget", "fagit", "fag", "faggy", "dyke", "dike", "retard", "retrd", "tard", "tarded",
    "spic", "spik", "spick", "wetback", "beaner", "chink", "chinky", "gook", "slant", "slanteye",
    "kike", "heeb", "hymie", "coon", "darkie", "darky", "jigaboo", "jiggaboo", "sambo", "cracker",
    "honky", "honkey", "gringo", "raghead", "towelhead", "camel jockey", "sandnigger", "tranny",
    "trannie", "shemale", "heshe", "ladyboy", "halfbreed", "halfcast", "mulatto", "redskin",
    "injun", "squaw", "pocahontas", "abo", "abbo", "paki", "pakki", "wop", "dago", "guinea",
    "guido", "polack", "polak", "kraut", "hun", "jap", "nip", "zipperhead",
];

/// Sexual content, anatomy, and adult services.
pub const SEXUAL: &[&str] = &[
    "sex", "sexx", "secks", "sexy", "sexi", "sexxy", "horny", "horni", "hrny", "vagina", "vag",
    "vajayjay", "cooch", "coochie", "coochy", "snatch", "minge", "penis", "pnis", "penus", "dong",
    "schlong", "wiener", "weiner", "willy", "wenis", "orgasm", "orgasim", "climax", "masturbat",
    "fap", "fapping", "jacking", "jerking", "blowjob", "bj", "blowie", "handjob", "hj", "rimjob",
    "rimming", "dildo", "vibrator", "buttplug", "erection", "erect", "boner", "stiffy", "hardon",
    "cum", "cumm", "jizz", "jiz", "sperm", "semen", "nut", "nutting", "nutted", "nude", "nudes",
    "naked", "nakey", "nekked", "strip", "stripper", "stripclub", "prostitut", "hooker", "escort",
    "callgirl", "sugardaddy", "sugarbaby", "brothel", "whorehouse", "condom", "contraceptive",
    "anal", "anus", "butthole", "bunghole", "rectum", "molest", "grope", "groping", "fondle",
    "pedophil", "paedophil", "pedo", "paedo", "childporn", "kiddieporn", "incest", "inbreeding",
    "bestiality", "zoophil", "fetish", "kink", "kinky", "bdsm", "bondage", "dominatrix",
    "sadomasochism", "gangbang", "threesome", "foursome", "orgy", "boobs", "boob", "bewbs", "tit",
    "tits", "titty", "titties", "knockers", "jugs", "rack", "clitoris", "clit", "scrotum",
    "ballsack", "balls", "ballz", "nutz", "nuts", "testicle", "queef", "camgirl", "camboy",
    "onlyfans", "chaturbate", "pornhub", "xvideos", "xhamster", "brazzers", "hentai", "ecchi",
    "nsfw", "upskirt", "downblouse", "creepshot", "deepthroat", "facefuck", "skullfuck",
    "pearl necklace", "moneyshot", "cuckold", "cuck", "smegma", "foreskin", "circumcis", "areola",
    "nipple", "nipples", "labia", "vulva", "goatse", "tubgirl", "lemon party", "ahegao", "bukakke",
    "bukkake", "sodomy", "sodomize", "sodomise", "fornicate", "fornicator", "fornication", "whore",
    "whor", "hoar", "hore", "ho", "skank", "tramp", "tart", "jezebel", "hussy", "floozy", "slut",
    "slt", "sloot", "slutt", "thot", "hoe", "heaux", "pimp", "pimping",
];

/// Violence, threats, weapons, and self-harm.
pub const VIOLENCE: &[&str] = &[
    "kill", "murder", "stab", "strangle", "choke", "smother", "slaughter", "massacre", "shoot",
    "snipe", "execute", "assassinat", "suicide", "suicid", "selfharm", "cutmyself", "killmyself",
    "kys", "kms", "rape", "raping", "rapist", "abuse", "abuser", "abusing", "torture", "torment",
    "bomb", "bombing", "bomber", "terrorist", "terror", "terroris", "arson", "arsonist", "genocide",
    "holocaust", "kidnap", "abduct", "assault", "battery", "mutilat", "dismember", "decapitat",
    "behead", "gun", "rifle", "pistol", "glock", "uzi", "shotgun", "machinegun", "knife", "machete",
    "axe", "weapon", "punch", "smack", "slap", "beat", "beating", "hitman", "bleed", "bleeding",
    "bloodbath", "poison", "poisoning", "drown", "drowning", "hang", "hanging", "noose", "gallows",
    "acid attack", "throw acid", "school shooting", "mass shooting", "mass murder", "die", "dying",
    "dead", "death", "corpse", "cadaver", "gore", "gory",
];

/// Hate speech and extremist vocabulary.
pub const HATE: &[&str] = &[
    "hate", "hater", "hating", "hateful", "racist", "racism", "racial", "nazi", "neonazi",
    "fascist", "fascism", "kkk", "klan", "whitesupremac", "whitepower", "whitepriv", "antisemit",
    "antisemitism", "islamophob", "homophob", "transphob", "xenophob", "bigot", "bigotry",
    "supremacist", "supremacy", "apartheid", "segregat", "ethnic cleansing", "lynching", "lynch",
    "slavery", "enslave", "oppress", "oppression", "discriminat", "misogyn", "misandry", "sexist",
    "sexism", "chauvinist", "incel", "blackpill", "redpill",
];

/// Drug and alcohol references.
pub const DRUGS: &[&str] = &[
    "cocaine", "cocain", "coke", "crack", "crackhead", "heroin", "heroine", "junk", "dope", "meth",
    "methamphetamine", "crystal", "tweaker", "weed", "marijuana", "cannabis", "ganja", "pot",
    "stoner", "pothead", "ecstasy", "mdma", "molly", "lsd", "acid", "shroom", "mushroom",
    "psychedelic", "xanax", "oxy", "oxycontin", "percocet", "vicodin", "fentanyl", "codeine",
    "ketamine", "pcp", "angel dust", "adderall", "ritalin", "drug", "drugg", "drugs", "dealer",
    "cartel", "overdose", "od", "smoke", "smoking", "vape", "vaping", "juul", "drunk", "drunken",
    "alcohol", "alcoholic", "beer", "vodka", "whiskey", "whisky", "tequila", "rum", "gin", "brandy",
    "bourbon", "wine", "champagne", "liquor", "booze", "brew", "wasted", "hammered", "plastered",
    "smashed", "sloshed", "tipsy", "buzzed", "hangover", "blunt", "joint", "bong", "pipe", "dab",
    "edible", "high", "stoned", "baked", "blazed", "lit", "faded", "snort", "inject", "needle",
    "syringe", "rehab", "detox", "withdrawal",
];

/// Insults and bullying.
pub const BULLYING: &[&str] = &[
    "idiot", "stupid", "dumb", "moron", "imbecil", "numbskull", "loser", "lser", "pathetic", "ugly",
    "fugly", "hideous", "grotesque", "fat", "fatty", "fatso", "obese", "lard", "tubby", "chubby",
    "porky", "piggy", "skinny", "anorexic", "bulimic", "nerd", "geek", "dork", "dweeb", "freak",
    "weirdo", "creep", "creepy", "psycho", "sociopath", "psychopath", "pervert", "perv", "sicko",
    "trash", "garbage", "scum", "scumbag", "lowlife", "worthless", "useless", "peasant", "pleb",
    "virgin", "simp", "coward", "wimp", "weakling", "sissy", "pansy", "wuss", "pushover", "lame",
    "cringe", "cringy", "cringey", "clown", "joke", "laughingstock", "disgusting", "disgust",
    "gross", "nasty", "vile", "repulsive", "annoying", "obnoxious", "insufferable", "unbearable",
    "degenerat", "deviant", "depraved", "deplorable", "ignorant", "ignoramus", "incompetent",
    "brainless", "dimwit", "halfwit", "nitwit", "witless", "douche", "douchebag", "dbag", "jackass",
    "dumbass", "smartass", "fatass", "badass", "kickass", "hardass", "lazyass", "buttface",
    "butthead", "buttmunch", "buttwipe", "poophead", "poopy", "poo", "poop", "snot", "snotnose",
    "booger", "sucker", "dirtbag", "sleazebag", "sleaze", "tool", "toolbox", "basic", "tryhard",
    "wannabe", "poser", "braindead", "airhead", "meathead", "bonehead", "blockhead", "knucklehead",
    "sellout", "snitch", "rat", "tattle", "bimbo", "himbo", "karen", "becky", "boomer", "snowflake",
    "triggered", "butthurt", "nolife", "getlife", "attention whore", "clout chaser",
];

/// Blasphemy and anti-religious terms.
pub const BLASPHEMY: &[&str] = &[
    "goddamn", "godd", "gdamn", "jesusf", "christf", "holyf", "antichrist", "hail satan",
    "satanist", "satanism", "lucifer", "devil worship", "blasphemy", "blaspheme", "heresy",
    "heretic", "infidel", "kafir", "heathen", "godless", "cult", "occult", "witchcraft", "sorcery",
    "voodoo", "blackmagic", "demon", "demonic", "possessed", "possession", "atheist", "agnostic",
    "false prophet", "false god",
];

/// Gambling, exploitation, crime, and other inappropriate topics.
pub const MISC: &[&str] = &[
    "gambling", "gamble", "casino", "betting", "bet", "poker", "tinder", "grindr", "bumble",
    "hookup", "affair", "cheating", "cheat", "unfaithful", "adultery", "adulterer", "mistress",
    "sidepiece", "sidechick", "sugar daddy", "sugar mommy", "predator", "grooming", "groomer",
    "stalker", "stalking", "harass", "harassment", "bully", "bullying", "threat", "threaten",
    "threatening", "intimidat", "blackmail", "extort", "fraud", "scam", "scammer", "phishing",
    "spam", "spammer", "troll", "trolling", "dox", "doxxing", "swatting", "hack", "hacker",
    "hacking", "leak", "leaked", "snuff", "dark web", "darkweb", "silkroad", "illegal", "illicit",
    "criminal", "felony", "felon", "prison", "jail", "inmate", "gang", "gangster", "thug", "hood",
    "ghetto", "ratchet", "pirate", "piracy", "counterfeit", "launder", "laundering", "smuggle",
    "smuggling", "trafficking", "conspiracy", "propaganda",
];

/// Every category paired with its name.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("profanity", PROFANITY),
    ("slurs", SLURS),
    ("sexual", SEXUAL),
    ("violence", VIOLENCE),
    ("hate", HATE),
    ("drugs", DRUGS),
    ("bullying", BULLYING),
    ("blasphemy", BLASPHEMY),
    ("misc", MISC),
];

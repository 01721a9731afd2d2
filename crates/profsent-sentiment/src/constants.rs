//! VADER rule constants: intensity increments, negations, boosters, idioms.

/// Booster word increment.
pub(crate) const B_INCR: f64 = 0.293;
/// Dampener word decrement.
pub(crate) const B_DECR: f64 = -0.293;
/// ALL-CAPS emphasis increment.
pub(crate) const C_INCR: f64 = 0.733;
/// Negation scalar.
pub(crate) const N_SCALAR: f64 = -0.74;

/// Normalization constant for the compound score.
pub(crate) const ALPHA: f64 = 15.0;

/// Punctuation that may be glued to either end of a word.
pub(crate) const PUNC_LIST: &[&str] = &[
    ".", "!", "?", ",", ";", ":", "-", "'", "\"", "!!", "!!!", "??", "???", "?!?", "!?!", "?!?!",
    "!?!?", "??!", "!??", "!!?", "?!!",
];

pub(crate) const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

/// Words that raise or lower the intensity of the following sentiment word.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("effing", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("flipping", B_INCR),
    ("flippin", B_INCR),
    ("fricking", B_INCR),
    ("frickin", B_INCR),
    ("frigging", B_INCR),
    ("friggin", B_INCR),
    ("fully", B_INCR),
    ("fucking", B_INCR),
    ("greatly", B_INCR),
    ("hella", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("just enough", B_DECR),
    ("kind of", B_DECR),
    ("kinda", B_DECR),
    ("kindof", B_DECR),
    ("kind-of", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sort of", B_DECR),
    ("sorta", B_DECR),
    ("sortof", B_DECR),
    ("sort-of", B_DECR),
];

/// Multi-word expressions whose valence overrides their parts.
pub(crate) const SPECIAL_CASE_IDIOMS: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("yeah right", -2.0),
    ("cut the mustard", 2.0),
    ("kiss of death", -1.5),
    ("hand to mouth", -2.0),
];

pub(crate) fn booster(word: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, scalar)| scalar)
}

pub(crate) fn idiom(phrase: &str) -> Option<f64> {
    SPECIAL_CASE_IDIOMS
        .iter()
        .find(|(p, _)| *p == phrase)
        .map(|&(_, valence)| valence)
}

/// Whether any of `words` negates what follows.
///
/// Matches the explicit negation list, any `n't` contraction, and `least`
/// unless it is part of `at least`.
pub(crate) fn negated(words: &[&str]) -> bool {
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

    if lowered.iter().any(|w| NEGATE.contains(&w.as_str())) {
        return true;
    }
    if lowered.iter().any(|w| w.contains("n't")) {
        return true;
    }
    if let Some(i) = lowered.iter().position(|w| w == "least") {
        if i > 0 && lowered[i - 1] != "at" {
            return true;
        }
    }
    false
}

/// Normalize a raw valence sum into `[-1.0, 1.0]`.
pub(crate) fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

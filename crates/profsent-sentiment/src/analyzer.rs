//! VADER (Valence Aware Dictionary and sEntiment Reasoner) scoring.

use crate::constants::{booster, idiom, negated, normalize, B_DECR, C_INCR, N_SCALAR};
use crate::lexicon::Lexicon;
use crate::tokens::{is_upper, SentiText};
use crate::types::SentimentScore;

/// Anything that turns a piece of text into polarity scores.
pub trait PolarityScorer {
    fn polarity_scores(&self, text: &str) -> SentimentScore;
}

/// Rule-based sentiment analyzer over a VADER lexicon.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains(&word.to_lowercase())
    }

    /// Valence of the word at `i`, adjusted for caps, boosters, negation,
    /// idioms, and `least`. Zero for words not in the lexicon.
    fn sentiment_valence(&self, text: &SentiText<'_>, item: &str, i: usize) -> f64 {
        let words = &text.words;
        let Some(mut valence) = self.lexicon.get(&item.to_lowercase()) else {
            return 0.0;
        };

        if text.is_cap_diff && is_upper(item) {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let prev = words[i - (start_i + 1)];
            if self.in_lexicon(prev) {
                continue;
            }

            let mut scalar = scalar_inc_dec(prev, valence, text.is_cap_diff);
            match start_i {
                1 => scalar *= 0.95,
                2 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            valence = never_check(valence, words, start_i, i);
            if start_i == 2 {
                valence = idioms_check(valence, words, i);
            }
        }

        self.least_check(valence, words, i)
    }

    fn least_check(&self, valence: f64, words: &[&str], i: usize) -> f64 {
        if i == 0 {
            return valence;
        }
        let prev = words[i - 1].to_lowercase();
        if prev != "least" || self.lexicon.contains(&prev) {
            return valence;
        }
        if i > 1 {
            let before = words[i - 2].to_lowercase();
            if before != "at" && before != "very" {
                return valence * N_SCALAR;
            }
            return valence;
        }
        valence * N_SCALAR
    }
}

impl PolarityScorer for SentimentAnalyzer {
    /// Score `text`.
    ///
    /// Returns all zeros when the text has no scorable tokens.
    fn polarity_scores(&self, text: &str) -> SentimentScore {
        let senti = SentiText::new(text);
        let words = &senti.words;

        let mut sentiments = Vec::with_capacity(words.len());
        for (i, item) in words.iter().enumerate() {
            let lower = item.to_lowercase();
            let kind_of = lower == "kind"
                && words
                    .get(i + 1)
                    .is_some_and(|next| next.to_lowercase() == "of");
            if kind_of || booster(&lower).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&senti, item, i));
        }

        but_check(words, &mut sentiments);
        score_valence(&sentiments, text)
    }
}

/// Booster/dampener contribution of `word` to a neighbouring valence.
fn scalar_inc_dec(word: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(&word.to_lowercase()) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if is_upper(word) && is_cap_diff {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn never_check(valence: f64, words: &[&str], start_i: usize, i: usize) -> f64 {
    let so_or_this = |w: &str| w == "so" || w == "this";
    match start_i {
        0 => {
            if negated(&[words[i - 1]]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if words[i - 2] == "never" && so_or_this(words[i - 1]) {
                return valence * 1.5;
            }
            if negated(&[words[i - 2]]) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if (words[i - 3] == "never" && so_or_this(words[i - 2])) || so_or_this(words[i - 1]) {
                return valence * 1.25;
            }
            if negated(&[words[i - 3]]) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// Apply special-case idioms and booster bigrams around `i` (requires `i >= 3`).
fn idioms_check(mut valence: f64, words: &[&str], i: usize) -> f64 {
    let onezero = format!("{} {}", words[i - 1], words[i]);
    let twoonezero = format!("{} {} {}", words[i - 2], words[i - 1], words[i]);
    let twoone = format!("{} {}", words[i - 2], words[i - 1]);
    let threetwoone = format!("{} {} {}", words[i - 3], words[i - 2], words[i - 1]);
    let threetwo = format!("{} {}", words[i - 3], words[i - 2]);

    for seq in [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo] {
        if let Some(v) = idiom(seq) {
            valence = v;
            break;
        }
    }

    if i + 1 < words.len() {
        if let Some(v) = idiom(&format!("{} {}", words[i], words[i + 1])) {
            valence = v;
        }
    }
    if i + 2 < words.len() {
        if let Some(v) = idiom(&format!("{} {} {}", words[i], words[i + 1], words[i + 2])) {
            valence = v;
        }
    }

    if booster(&threetwo).is_some() || booster(&twoone).is_some() {
        valence += B_DECR;
    }
    valence
}

/// Soften sentiment before the first `but` and strengthen it after.
fn but_check(words: &[&str], sentiments: &mut [f64]) {
    let Some(bi) = words.iter().position(|w| w.to_lowercase() == "but") else {
        return;
    };
    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < bi {
            *sentiment *= 0.5;
        } else if idx > bi {
            *sentiment *= 1.5;
        }
    }
}

fn amplify_exclamation(text: &str) -> f64 {
    let count = text.matches('!').count().min(4);
    #[allow(clippy::cast_precision_loss)]
    let count = count as f64;
    count * 0.292
}

fn amplify_question(text: &str) -> f64 {
    let count = text.matches('?').count();
    if count <= 1 {
        return 0.0;
    }
    if count > 3 {
        return 0.96;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = count as f64;
    count * 0.18
}

fn sift_sentiment_scores(sentiments: &[f64]) -> (f64, f64, usize) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }
    (pos_sum, neg_sum, neu_count)
}

/// Round to `places` decimals, ties to even.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> SentimentScore {
    if sentiments.is_empty() {
        return SentimentScore::default();
    }

    let punct_amplifier = amplify_exclamation(text) + amplify_question(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct_amplifier;
    } else if sum < 0.0 {
        sum -= punct_amplifier;
    }
    let compound = normalize(sum);

    let (mut pos_sum, mut neg_sum, neu_count) = sift_sentiment_scores(sentiments);
    if pos_sum > neg_sum.abs() {
        pos_sum += punct_amplifier;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct_amplifier;
    }

    #[allow(clippy::cast_precision_loss)]
    let neu_count = neu_count as f64;
    let total = pos_sum + neg_sum.abs() + neu_count;

    SentimentScore {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_LEXICON: &str = "good\t1.9\ngreat\t3.1\nbad\t-2.5\nlove\t3.2\nhate\t-2.7\n";

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new(Lexicon::parse(TEST_LEXICON).expect("lexicon"))
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(analyzer().polarity_scores(""), SentimentScore::default());
        assert_eq!(analyzer().polarity_scores("   "), SentimentScore::default());
    }

    #[test]
    fn single_positive_word() {
        let s = analyzer().polarity_scores("Great");
        assert_eq!(s.pos, 1.0);
        assert_eq!(s.neu, 0.0);
        assert_eq!(s.neg, 0.0);
        assert_eq!(s.compound, 0.6249);
    }

    #[test]
    fn single_negative_word() {
        let s = analyzer().polarity_scores("Bad");
        assert_eq!(s.neg, 1.0);
        assert_eq!(s.compound, -0.5423);
    }

    #[test]
    fn unknown_words_are_neutral() {
        let s = analyzer().polarity_scores("OK");
        assert_eq!(s.neu, 1.0);
        assert_eq!(s.compound, 0.0);
    }

    #[test]
    fn proportions_count_neutral_words() {
        let s = analyzer().polarity_scores("The professor is good");
        assert_eq!(s.pos, 0.492);
        assert_eq!(s.neu, 0.508);
        assert_eq!(s.neg, 0.0);
        assert_eq!(s.compound, 0.4404);
    }

    #[test]
    fn negation_flips_polarity() {
        let s = analyzer().polarity_scores("not good");
        assert_eq!(s.compound, -0.3412);
    }

    #[test]
    fn repeated_word_uses_its_own_context() {
        let a = analyzer();
        let single = a.polarity_scores("good");
        let s = a.polarity_scores("good not good");
        // Only the second "good" is negated, so the two roughly cancel.
        assert!(s.compound > 0.0, "got {}", s.compound);
        assert!(s.compound < single.compound, "got {}", s.compound);
        assert_eq!(s.compound, 0.1265);
    }

    #[test]
    fn booster_increases_intensity() {
        let a = analyzer();
        assert!(a.polarity_scores("very good").compound > a.polarity_scores("good").compound);
        assert!(a.polarity_scores("barely good").compound < a.polarity_scores("good").compound);
    }

    #[test]
    fn caps_emphasis_when_mixed_case() {
        let a = analyzer();
        assert!(
            a.polarity_scores("GOOD class").compound > a.polarity_scores("good class").compound
        );
    }

    #[test]
    fn exclamation_marks_amplify() {
        let a = analyzer();
        let plain = a.polarity_scores("good").compound;
        let loud = a.polarity_scores("good!!!").compound;
        assert!(loud > plain, "{loud} should exceed {plain}");
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        let s = analyzer().polarity_scores("good but bad");
        assert!(s.compound < 0.0, "got {}", s.compound);
    }

    #[test]
    fn scores_are_deterministic() {
        let a = analyzer();
        let text = "I love this class but hate the exams!";
        assert_eq!(a.polarity_scores(text), a.polarity_scores(text));
    }

    #[test]
    fn proportions_sum_to_about_one() {
        let s = analyzer().polarity_scores("I love the lectures but the grading is bad");
        let total = s.pos + s.neu + s.neg;
        assert!((total - 1.0).abs() < 0.01, "got {total}");
    }

    #[test]
    fn rounding_halves_go_to_even() {
        assert_eq!(round_to(0.0625, 3), 0.062);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(0.03125, 4), 0.0312);
        assert_eq!(round_to(-0.03125, 4), -0.0312);
        assert_eq!(round_to(0.4404, 4), 0.4404);
    }
}

//! Tokenization for the VADER analyzer.

use std::collections::HashSet;

use crate::constants::PUNC_LIST;

/// Text split into the tokens VADER scores, plus whether it mixes ALL-CAPS
/// and non-caps words.
#[derive(Debug)]
pub(crate) struct SentiText<'a> {
    pub words: Vec<&'a str>,
    pub is_cap_diff: bool,
}

impl<'a> SentiText<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let words = words_and_emoticons(text);
        let is_cap_diff = allcap_differential(&words);
        Self { words, is_cap_diff }
    }
}

/// Python-style `str.isupper`: at least one cased character and no lowercase.
pub(crate) fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Whitespace tokens longer than one character, with a single leading or
/// trailing punctuation run removed when what remains is a plain word.
/// Emoticons such as `:)` are left intact.
fn words_and_emoticons(text: &str) -> Vec<&str> {
    let no_punc: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    let words_only: HashSet<&str> = no_punc
        .split_whitespace()
        .filter(|w| char_len(w) > 1)
        .collect();

    text.split_whitespace()
        .filter(|w| char_len(w) > 1)
        .map(|token| strip_glued_punc(token, &words_only))
        .collect()
}

fn strip_glued_punc<'t>(token: &'t str, words_only: &HashSet<&str>) -> &'t str {
    for punc in PUNC_LIST {
        if let Some(word) = token.strip_suffix(punc) {
            if words_only.contains(word) {
                return word;
            }
        }
        if let Some(word) = token.strip_prefix(punc) {
            if words_only.contains(word) {
                return word;
            }
        }
    }
    token
}

/// True when some, but not all, words are ALL CAPS.
fn allcap_differential(words: &[&str]) -> bool {
    let allcap_words = words.iter().filter(|w| is_upper(w)).count();
    let differential = words.len() - allcap_words;
    differential > 0 && differential < words.len()
}

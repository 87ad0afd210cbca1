//! Text normalization
//!
//! raw text -> `clean` -> `tokenize` -> `remove_stopwords`

pub mod stopwords;

use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S*").expect("url pattern is valid"));
static NON_LETTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("non-letter pattern is valid"));
static CLITIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)(n['\x{2019}]t|['\x{2019}](?:s|re|ve|ll|d|m))$")
        .expect("clitic pattern is valid")
});
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lowercase, remove URLs, punctuation, digits and extra spaces.
///
/// Steps, in order:
/// 1. lowercase
/// 2. drop `http` and the non-whitespace run after it
/// 3. drop every char that is not `a-z` or whitespace
/// 4. drop any `http` that step 3 joined together (`ht1tp` -> `http`)
/// 5. collapse whitespace runs to a single space
/// 6. trim
///
/// # Examples
/// ```
/// use keyword_extractor::preprocess::clean;
/// assert_eq!(clean("Visit https://bbc.co.uk NOW, 2024!"), "visit now");
/// ```
pub fn clean(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = URL_PATTERN.replace_all(&lowered, "");
    let letters = NON_LETTER_PATTERN.replace_all(&without_urls, "");
    // 各マッチは空白か末尾まで消すので、1回で新しい http は残らない
    let letters = URL_PATTERN.replace_all(&letters, "");
    WHITESPACE_PATTERN
        .replace_all(&letters, " ")
        .trim()
        .to_string()
}

/// Word-boundary tokenization (Unicode UAX #29).
///
/// Whitespace segments are dropped, punctuation stays as its own token:
/// `"hello, world!"` -> `["hello", ",", "world", "!"]`
///
/// English clitics are split off the way Treebank tokenizers do:
/// `"can't"` -> `["ca", "n't"]`, `"it's"` -> `["it", "'s"]`.
/// Abbreviations are not kept whole; `"U.S."` gives `["U.S", "."]`.
/// Neither case reaches `preprocess`, since `clean` removes apostrophes and dots first.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for segment in text.split_word_bounds() {
        if segment.trim().is_empty() {
            continue;
        }
        match CLITIC_PATTERN.captures(segment) {
            Some(caps) => {
                tokens.push(caps[1].to_string());
                tokens.push(caps[2].to_string());
            }
            None => tokens.push(segment.to_string()),
        }
    }
    tokens
}

/// Remove tokens found in the English stopword set.
/// Order and duplicates of the remaining tokens are kept.
pub fn remove_stopwords<T>(tokens: &[T]) -> Vec<String>
where
    T: AsRef<str>,
{
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| !stopwords::is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// Complete pipeline: `remove_stopwords(tokenize(clean(text)))`
pub fn preprocess(text: &str) -> Vec<String> {
    let cleaned = clean(text);
    let tokens = tokenize(&cleaned);
    remove_stopwords(&tokens)
}

/// `preprocess` for each document, on the rayon pool.
/// Output index `i` belongs to input index `i`.
pub fn preprocess_bulk<T>(texts: &[T]) -> Vec<Vec<String>>
where
    T: AsRef<str> + Sync,
{
    tracing::debug!(docs = texts.len(), "preprocessing corpus");
    texts
        .par_iter()
        .map(|text| preprocess(text.as_ref()))
        .collect()
}

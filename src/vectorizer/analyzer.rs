use std::sync::LazyLock;

use regex::Regex;

use crate::{preprocess::stopwords, vectorizer::term::TermFrequency};

/// Two or more word characters between word boundaries.
/// Punctuation and single characters never form a term.
static TERM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("term pattern is valid"));

/// TF-IDF analyzer
/// Lowercases raw text, extracts word terms and drops English stopwords.
/// Unlike `preprocess::preprocess`, digits and non-ASCII letters survive.
///
/// # Examples
/// ```
/// use keyword_extractor::vectorizer::analyzer::analyze;
/// assert_eq!(analyze("The BBC's 2024 report, in full."), vec!["bbc", "2024", "report", "full"]);
/// ```
pub fn analyze(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TERM_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|term| !stopwords::is_stopword(term))
        .map(str::to_string)
        .collect()
}

/// Analyze and count in one step
pub fn analyze_into_freq(text: &str) -> TermFrequency {
    let terms = analyze(text);
    TermFrequency::from(terms.as_slice())
}

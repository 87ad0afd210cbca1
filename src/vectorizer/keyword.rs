use std::fmt;

use serde::{Deserialize, Serialize};

/// A ranked term and its TF-IDF score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub score: f64,
}

impl Keyword {
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{:.6}", self.term, self.score)
    }
}

/// Project a ranking down to its terms
pub fn into_terms(keywords: Vec<Keyword>) -> Vec<String> {
    keywords.into_iter().map(|k| k.term).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_tab_separated() {
        assert_eq!(Keyword::new("rust", 0.5).to_string(), "rust\t0.500000");
    }

    #[test]
    fn serializes_as_object() {
        let json = serde_json::to_string(&Keyword::new("bbc", 1.0)).unwrap();
        assert_eq!(json, r#"{"term":"bbc","score":1.0}"#);
    }
}

use ahash::RandomState;
use indexmap::IndexSet;

use crate::{
    config::validate_max_df,
    error::{Error, Result},
    vectorizer::corpus::Corpus,
};

/// Vocabulary
/// Bijection between surviving terms and dense indices `0..len`.
///
/// Indices follow ascending byte-wise lexicographic order of the terms,
/// so the same corpus and `max_df` always give the same assignment.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>, RandomState>,
    /// terms removed by the max-df cutoff
    pruned_num: usize,
}

impl PartialEq for Vocabulary {
    /// Order-sensitive: equal only if every term has the same index
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len() && self.terms.iter().eq(other.terms.iter())
    }
}

impl Vocabulary {
    /// Build from document frequencies.
    ///
    /// Terms with `df > max_df * doc_num` are dropped entirely.
    ///
    /// # Errors
    /// * `Configuration` - `max_df` outside `(0, 1]`
    /// * `InvalidInput` - empty corpus, or nothing left after filtering
    pub fn build(corpus: &Corpus, max_df: f64) -> Result<Self> {
        validate_max_df(max_df)?;
        let doc_num = corpus.get_doc_num();
        if doc_num == 0 {
            return Err(Error::InvalidInput(
                "cannot build a vocabulary from an empty corpus".to_string(),
            ));
        }
        if corpus.term_num() == 0 {
            return Err(Error::InvalidInput(
                "empty vocabulary; the documents contain only stop words or no terms".to_string(),
            ));
        }

        let max_doc_count = max_df * doc_num as f64;
        let mut kept = Vec::with_capacity(corpus.term_num());
        let mut pruned_num = 0usize;
        for (term, df) in corpus.doc_freq_vector() {
            if df as f64 <= max_doc_count {
                kept.push(term);
            } else {
                pruned_num += 1;
            }
        }
        tracing::debug!(
            doc_num,
            seen = corpus.term_num(),
            kept = kept.len(),
            pruned = pruned_num,
            max_df,
            "vocabulary filtered"
        );
        if kept.is_empty() {
            tracing::warn!(doc_num, max_df, "max_df pruned every term");
            return Err(Error::InvalidInput(format!(
                "no terms remain after pruning with max_df={max_df} over {doc_num} documents"
            )));
        }

        // 辞書順で index を振る
        kept.sort_unstable();
        let mut terms = IndexSet::with_capacity_and_hasher(kept.len(), RandomState::new());
        terms.extend(kept);
        Ok(Self { terms, pruned_num })
    }

    /// Number of terms
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Index of `term`, if it survived filtering
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at `index`
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| t.as_ref())
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Terms in index order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }

    /// Number of terms dropped by the max-df cutoff
    #[inline]
    pub fn pruned_num(&self) -> usize {
        self.pruned_num
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::term::TermFrequency;

    fn corpus_of(docs: &[&[&str]]) -> Corpus {
        let corpus = Corpus::new();
        for doc in docs {
            corpus.add_freq(&TermFrequency::from(*doc));
        }
        corpus
    }

    #[test]
    fn indices_are_lexicographic() {
        let corpus = corpus_of(&[&["zebra", "apple"], &["mango"], &["apple", "kiwi"]]);
        let vocab = Vocabulary::build(&corpus, 1.0).unwrap();
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["apple", "kiwi", "mango", "zebra"]);
        assert_eq!(vocab.index_of("mango"), Some(2));
        assert_eq!(vocab.term(3), Some("zebra"));
        assert_eq!(vocab.term(4), None);
        assert_eq!(vocab.index_of("pear"), None);
    }

    #[test]
    fn max_df_drops_frequent_terms() {
        // 3 docs * 0.85 = 2.55 -> df 3 is dropped, df 2 stays
        let corpus = corpus_of(&[&["news", "bbc"], &["news", "bbc"], &["news", "sport"]]);
        let vocab = Vocabulary::build(&corpus, 0.85).unwrap();
        assert!(!vocab.contains("news"));
        assert!(vocab.contains("bbc"));
        assert!(vocab.contains("sport"));
        assert_eq!(vocab.pruned_num(), 1);
    }

    #[test]
    fn everything_pruned_is_an_error() {
        let corpus = corpus_of(&[&["only", "words"]]);
        assert!(matches!(Vocabulary::build(&corpus, 0.85), Err(Error::InvalidInput(_))));
        assert!(Vocabulary::build(&corpus, 1.0).is_ok());
    }

    #[test]
    fn empty_inputs_are_errors() {
        assert!(matches!(Vocabulary::build(&Corpus::new(), 0.85), Err(Error::InvalidInput(_))));
        let stopword_only = corpus_of(&[&[], &[]]);
        assert!(matches!(Vocabulary::build(&stopword_only, 0.85), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn invalid_max_df_is_configuration_error() {
        let corpus = corpus_of(&[&["a1"]]);
        assert!(matches!(Vocabulary::build(&corpus, 0.0), Err(Error::Configuration(_))));
        assert!(matches!(Vocabulary::build(&corpus, 1.2), Err(Error::Configuration(_))));
    }

    #[test]
    fn rebuild_gives_identical_assignment() {
        let docs: &[&[&str]] = &[&["delta", "alpha"], &["charlie", "bravo", "alpha"], &["echo"]];
        let first = Vocabulary::build(&corpus_of(docs), 0.85).unwrap();
        let second = Vocabulary::build(&corpus_of(docs), 0.85).unwrap();
        assert_eq!(first, second);
        for term in first.iter() {
            assert_eq!(first.index_of(term), second.index_of(term));
        }
    }
}

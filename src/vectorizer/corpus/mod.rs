use std::sync::atomic::{AtomicU64, Ordering};

use ahash::RandomState;
use dashmap::DashMap;

use crate::vectorizer::term::TermFrequency;

/// keep document count and document frequencies in a thread-safe way
///
/// Filled from rayon workers during the first pass of a TF-IDF fit,
/// then only read.
#[derive(Debug, Default)]
pub struct Corpus {
    /// number of documents added
    doc_num: AtomicU64,
    /// term -> number of documents containing it
    doc_freqs: DashMap<Box<str>, u64, RandomState>,
}

impl Clone for Corpus {
    fn clone(&self) -> Self {
        Self {
            doc_num: AtomicU64::new(self.doc_num.load(Ordering::Acquire)),
            doc_freqs: self.doc_freqs.clone(),
        }
    }
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: AtomicU64::new(0),
            doc_freqs: DashMap::with_hasher(RandomState::new()),
        }
    }

    /// Add one document's distinct terms.
    /// `terms` must not contain duplicates; each entry counts as one document hit.
    pub fn add_set<T>(&self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num.fetch_add(1, Ordering::Relaxed);
        for term in terms {
            // 既にあれば +1
            if let Some(mut count) = self.doc_freqs.get_mut(term.as_ref()) {
                *count += 1;
                continue;
            }
            self.doc_freqs
                .entry(term.as_ref().into())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
    }

    /// Add one document from its term frequency
    #[inline]
    pub fn add_freq(&self, freq: &TermFrequency) {
        self.add_set(&freq.term_set_ref_str());
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num.load(Ordering::Relaxed)
    }

    /// Number of documents containing `term`
    #[inline]
    pub fn get_doc_freq(&self, term: &str) -> u64 {
        self.doc_freqs.get(term).map_or(0, |count| *count)
    }

    /// Number of distinct terms seen, before any pruning
    #[inline]
    pub fn term_num(&self) -> usize {
        self.doc_freqs.len()
    }

    /// Snapshot of `(term, document frequency)` pairs in arbitrary order
    pub fn doc_freq_vector(&self) -> Vec<(Box<str>, u64)> {
        self.doc_freqs
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rayon::prelude::*;

    use super::*;

    #[test]
    fn counts_documents_not_occurrences() {
        let corpus = Corpus::new();
        corpus.add_freq(&TermFrequency::from(&["rust", "rust", "fast"][..]));
        corpus.add_freq(&TermFrequency::from(&["rust", "safe"][..]));
        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_doc_freq("rust"), 2);
        assert_eq!(corpus.get_doc_freq("fast"), 1);
        assert_eq!(corpus.get_doc_freq("slow"), 0);
        assert_eq!(corpus.term_num(), 3);
    }

    #[test]
    fn empty_document_still_counts() {
        let corpus = Corpus::new();
        corpus.add_freq(&TermFrequency::new());
        assert_eq!(corpus.get_doc_num(), 1);
        assert_eq!(corpus.term_num(), 0);
    }

    #[test]
    fn parallel_accumulation_matches_sequential() {
        let docs: Vec<TermFrequency> = (0..200)
            .map(|i| {
                let terms = [format!("t{}", i % 7), format!("t{}", i % 11), "common".to_string()];
                TermFrequency::from(&terms[..])
            })
            .collect();

        let parallel = Corpus::new();
        docs.par_iter().for_each(|tf| parallel.add_freq(tf));
        let sequential = Corpus::new();
        docs.iter().for_each(|tf| sequential.add_freq(tf));

        assert_eq!(parallel.get_doc_num(), 200);
        let mut a = parallel.doc_freq_vector();
        let mut b = sequential.doc_freq_vector();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert_eq!(parallel.get_doc_freq("common"), 200);
    }
}

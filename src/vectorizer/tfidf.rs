use num::Float;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{corpus::Corpus, term::TermFrequency, vocabulary::Vocabulary},
};

/// TF-IDF calculation engine
///
/// Plug a different weighting into `TFIDFVectorizer<N, E>` by implementing
/// this trait. Engines are stateless; all inputs are frozen before they run.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// IDFベクトルを生成する
    /// # Arguments
    /// * `corpus` - document frequencies
    /// * `vocab` - surviving terms, defines the dimension order
    /// # Returns
    /// * `Vec<N>` - one idf per vocabulary index
    fn idf_vec(corpus: &Corpus, vocab: &Vocabulary) -> Vec<N>;

    /// TFベクトルを生成する
    /// Terms missing from `vocab` are skipped.
    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> ZeroSpVec<N>;

    /// Weighted row for one document: `tf * idf`, L2-normalized.
    fn tfidf_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[N]) -> ZeroSpVec<N> {
        let mut row = Self::tf_vec(freq, vocab);
        row.hadamard_dense(idf);
        row.l2_normalize();
        row.shrink_to_fit();
        row
    }
}

/// デフォルトのTF-IDFエンジン
/// - tf: raw count
/// - idf: `ln((1 + N) / (1 + df)) + 1` (smoothed, always > 0)
/// - rows: L2-normalized
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Smoothed idf for one term
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocab: &Vocabulary) -> Vec<N> {
        let doc_num = corpus.get_doc_num();
        vocab
            .iter()
            .map(|term| {
                let idf = Self::idf_calc(doc_num, corpus.get_doc_freq(term));
                N::from(idf).unwrap_or_else(N::zero)
            })
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> ZeroSpVec<N> {
        let entries = freq.iter().filter_map(|(term, count)| {
            let idx = vocab.index_of(term)?;
            Some((idx, N::from(count).unwrap_or_else(N::zero)))
        });
        ZeroSpVec::from_entries(vocab.len(), entries)
    }
}

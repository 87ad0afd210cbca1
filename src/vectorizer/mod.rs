pub mod analyzer;
pub mod corpus;
pub mod keyword;
pub mod matrix;
pub mod term;
pub mod tfidf;
pub mod vocabulary;

use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;

use crate::{
    config::validate_max_df,
    error::{Error, Result},
    utils::{
        math::vector::ZeroSpVec,
        sort::{score_desc_index_asc, top_n_total_by},
    },
    vectorizer::{
        analyzer::analyze_into_freq,
        corpus::Corpus,
        keyword::Keyword,
        matrix::WeightMatrix,
        term::TermFrequency,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        vocabulary::Vocabulary,
    },
};

/// Fitted TF-IDF model over one corpus
///
/// Built in two passes by `fit` and read-only afterwards:
/// 1. analyze every document, count document frequencies, freeze the vocabulary
/// 2. weight every document row with the engine `E`
///
/// Nothing is shared between fits; every call builds its own corpus,
/// vocabulary and matrix.
///
/// # Examples
/// ```
/// use keyword_extractor::TFIDFVectorizer;
/// let texts = ["python python python", "javascript javascript", "rust"];
/// let model: TFIDFVectorizer = TFIDFVectorizer::fit(&texts, 0.85).unwrap();
/// let top = model.top_keywords_global(2);
/// assert_eq!(top.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    /// Document frequencies of the fitted corpus
    pub corpus: Corpus,
    /// Surviving terms, column order of `matrix`
    pub vocabulary: Vocabulary,
    /// IDF per vocabulary index
    pub idf_vec: Vec<N>,
    /// L2-normalized TF-IDF rows, one per input document
    pub matrix: WeightMatrix<N>,
    _marker: PhantomData<fn() -> E>,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Fit on raw document texts.
    ///
    /// # Arguments
    /// * `texts` - raw documents, order defines the row index
    /// * `max_df` - prune terms found in more than this fraction of documents
    ///
    /// # Errors
    /// * `Configuration` - `max_df` outside `(0, 1]`
    /// * `InvalidInput` - no documents, or no term survives analysis and pruning
    pub fn fit<T>(texts: &[T], max_df: f64) -> Result<Self>
    where
        T: AsRef<str> + Sync,
    {
        let _span = tracing::info_span!("tfidf_fit", docs = texts.len(), max_df).entered();
        validate_max_df(max_df)?;
        if texts.is_empty() {
            return Err(Error::InvalidInput(
                "cannot fit TF-IDF on an empty corpus".to_string(),
            ));
        }

        let freqs: Vec<TermFrequency> = texts
            .par_iter()
            .map(|text| analyze_into_freq(text.as_ref()))
            .collect();
        Self::fit_freqs(&freqs, max_df)
    }

    /// Fit on already analyzed documents (one `TermFrequency` per document)
    pub fn fit_freqs(freqs: &[TermFrequency], max_df: f64) -> Result<Self> {
        validate_max_df(max_df)?;
        if freqs.is_empty() {
            return Err(Error::InvalidInput(
                "cannot fit TF-IDF on an empty corpus".to_string(),
            ));
        }

        // pass 1: document frequencies -> frozen vocabulary
        let corpus = Corpus::new();
        freqs.par_iter().for_each(|freq| corpus.add_freq(freq));
        let vocabulary = Vocabulary::build(&corpus, max_df)?;

        // pass 2: weighting
        let idf_vec = E::idf_vec(&corpus, &vocabulary);
        let rows: Vec<ZeroSpVec<N>> = freqs
            .par_iter()
            .map(|freq| E::tfidf_vec(freq, &vocabulary, &idf_vec))
            .collect();
        let matrix = WeightMatrix::from_rows(rows, vocabulary.len());

        tracing::debug!(
            docs = freqs.len(),
            vocab = vocabulary.len(),
            nnz = matrix.nnz(),
            "tf-idf matrix built"
        );

        Ok(Self {
            corpus,
            vocabulary,
            idf_vec,
            matrix,
            _marker: PhantomData,
        })
    }
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Number of fitted documents (rows)
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.matrix.shape().0
    }

    /// Number of vocabulary terms (columns)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Stored (nonzero) weights in the matrix
    #[inline]
    pub fn nnz(&self) -> usize {
        self.matrix.nnz()
    }

    /// Documents containing `term`, counted before max-df pruning
    #[inline]
    pub fn document_frequency(&self, term: &str) -> u64 {
        self.corpus.get_doc_freq(term)
    }

    /// IDF of a vocabulary term
    #[inline]
    pub fn idf(&self, term: &str) -> Option<N> {
        let idx = self.vocabulary.index_of(term)?;
        self.idf_vec.get(idx).copied()
    }

    /// Weight of `term` in document `doc`
    #[inline]
    pub fn weight(&self, doc: usize, term: &str) -> Option<N> {
        let idx = self.vocabulary.index_of(term)?;
        self.matrix.get(doc, idx)
    }

    /// Top `n` keywords of one document.
    /// Only strictly positive weights qualify; ties go to the lower vocabulary index.
    ///
    /// # Errors
    /// * `InvalidInput` - `doc` is not a fitted row
    pub fn top_keywords_per_document(&self, doc: usize, n: usize) -> Result<Vec<Keyword>> {
        let row = self.matrix.row(doc).ok_or_else(|| {
            Error::InvalidInput(format!(
                "document index {doc} out of range for {} documents",
                self.doc_num()
            ))
        })?;
        Ok(self.rank_row(row, n))
    }

    /// Top `n` keywords of every document, in document order
    pub fn top_keywords_all_documents(&self, n: usize) -> Vec<Vec<Keyword>> {
        self.matrix
            .rows()
            .par_iter()
            .map(|row| self.rank_row(row, n))
            .collect()
    }

    /// Top `n` terms by column sum over the whole corpus.
    /// Ties go to the lower vocabulary index.
    pub fn top_keywords_global(&self, n: usize) -> Vec<Keyword> {
        let scored: Vec<(usize, f64)> = self
            .matrix
            .column_sums()
            .into_iter()
            .enumerate()
            .map(|(idx, sum)| (idx, sum.to_f64().unwrap_or(0.0)))
            .collect();
        self.keywords_from_ranked(top_n_total_by(scored, n, |a, b| score_desc_index_asc(*a, *b)))
    }

    fn rank_row(&self, row: &ZeroSpVec<N>, n: usize) -> Vec<Keyword> {
        let scored: Vec<(usize, f64)> = row
            .raw_iter()
            .filter(|&(_, weight)| weight > N::zero())
            .map(|(idx, weight)| (idx, weight.to_f64().unwrap_or(0.0)))
            .collect();
        self.keywords_from_ranked(top_n_total_by(scored, n, |a, b| score_desc_index_asc(*a, *b)))
    }

    fn keywords_from_ranked(&self, ranked: Vec<(usize, f64)>) -> Vec<Keyword> {
        ranked
            .into_iter()
            .filter_map(|(idx, score)| {
                self.vocabulary
                    .term(idx)
                    .map(|term| Keyword::new(term, score))
            })
            .collect()
    }
}

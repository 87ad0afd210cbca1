/// This crate is a Keyword Extraction Engine for news-style text collections.
/// Frequency ranking, TF-IDF ranking and noun phrase ranking share one preprocessing layer.
pub mod config;
pub mod error;
pub mod extract;
pub mod phrase;
pub mod preprocess;
pub mod vectorizer;
pub mod utils;

/// Extractor Configuration
/// Parameters shared by every ranking:
/// - `max_df`: document-frequency ceiling for the TF-IDF vocabulary (default 0.85)
/// - `top_n`: number of results per ranking (default 10)
///
/// Deserializable with serde; missing fields fall back to the defaults.
pub use config::ExtractorConfig;

/// Error type of this crate
/// - `InvalidInput`: the input cannot produce a result (empty corpus, empty vocabulary, bad index)
/// - `Configuration`: a parameter is out of range
pub use error::{Error, Result};

/// Keyword Extractor
/// Holds a validated `ExtractorConfig` and exposes every ranking with it.
///
/// The free functions below do the same with an explicit `n` and the default `max_df`.
pub use extract::KeywordExtractor;

/// Ranking functions
/// - `top_keywords` / `bulk_top_keywords`: most frequent tokens, ties by first occurrence
/// - `tfidf_top_keywords_per_document` / `tfidf_top_keywords_global`: TF-IDF terms
/// - `tfidf_keywords_per_document` / `tfidf_keywords_global`: TF-IDF terms with scores
pub use extract::{
    bulk_top_keywords, tfidf_keywords_global, tfidf_keywords_per_document,
    tfidf_top_keywords_global, tfidf_top_keywords_per_document, top_keywords,
};

/// Text normalization
/// - `clean`: lowercase, strip URLs and every non-letter character, collapse whitespace
/// - `tokenize`: split on word boundaries
/// - `remove_stopwords`: drop English stop words
/// - `preprocess` / `preprocess_bulk`: all of the above
pub use preprocess::{clean, preprocess, preprocess_bulk, remove_stopwords, tokenize};

/// Noun phrase ranking
/// Chunking is supplied by the caller through `NounPhraseChunker`
/// (any `Fn(&str) -> Vec<String>` qualifies); counting and ranking live here.
pub use phrase::{
    extract_bulk_noun_phrases, extract_noun_phrases, top_noun_phrases, top_phrases,
    NounPhraseChunker, PhraseAggregator, PhraseCount,
};

/// TF-IDF Vectorizer
/// A fitted model over one corpus. Holds:
/// - The document frequencies (`Corpus`)
/// - The frozen, lexicographically indexed `Vocabulary`
/// - The IDF vector
/// - The L2-normalized document x term `WeightMatrix`
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
pub use vectorizer::TFIDFVectorizer;

/// Corpus for TF-IDF Vectorizer
/// It does not store document text; it only manages:
/// - The number of documents
/// - The number of documents in which each term appears
///
/// # Thread Safety
/// Documents can be added concurrently from multiple threads.
/// Implemented using DashMap and atomics.
pub use vectorizer::corpus::Corpus;

/// Term Frequency structure
/// Counts of each term within one token sequence, in first-occurrence order.
/// Used as base data for TF calculation and frequency ranking.
pub use vectorizer::term::TermFrequency;

/// TF IDF Calculation Engine Trait
/// By implementing this trait, you can plug different TF-IDF calculation strategies
/// into `TFIDFVectorizer<N, E>`.
/// `DefaultTFIDFEngine` uses raw counts, smoothed idf and L2 row normalization.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Vocabulary, weight matrix and ranked keyword
pub use vectorizer::{keyword::Keyword, matrix::WeightMatrix, vocabulary::Vocabulary};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// Noun phrase chunker
///
/// Syntactic analysis lives outside this crate. Any closure
/// `Fn(&str) -> Vec<String>` is a chunker.
pub trait NounPhraseChunker {
    /// Surface text of every noun phrase in `text`, in document order
    fn noun_chunks(&self, text: &str) -> Vec<String>;
}

impl<F> NounPhraseChunker for F
where
    F: Fn(&str) -> Vec<String>,
{
    #[inline]
    fn noun_chunks(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// A phrase and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: u64,
}

/// Lowercased noun phrases of one document, in chunker order
pub fn extract_noun_phrases<C>(chunker: &C, text: &str) -> Vec<String>
where
    C: NounPhraseChunker + ?Sized,
{
    chunker
        .noun_chunks(text)
        .into_iter()
        .map(|chunk| chunk.to_lowercase())
        .collect()
}

/// `extract_noun_phrases` over many documents, order preserved
pub fn extract_bulk_noun_phrases<C, T>(chunker: &C, texts: &[T]) -> Vec<Vec<String>>
where
    C: NounPhraseChunker + Sync + ?Sized,
    T: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| extract_noun_phrases(chunker, text.as_ref()))
        .collect()
}

/// Pooled phrase counter across documents
///
/// Counts are case-insensitive: every phrase is lowercased on insert.
#[derive(Debug, Clone, Default)]
pub struct PhraseAggregator {
    freq: TermFrequency,
}

impl PhraseAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the phrases of one document
    pub fn add_document<T>(&mut self, phrases: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for phrase in phrases {
            self.freq.add_term(&phrase.as_ref().to_lowercase());
        }
        self
    }

    /// Count of `phrase` (case-insensitive)
    #[inline]
    pub fn count(&self, phrase: &str) -> u64 {
        self.freq.term_count(&phrase.to_lowercase())
    }

    /// Distinct phrases seen
    #[inline]
    pub fn phrase_num(&self) -> usize {
        self.freq.term_num()
    }

    /// Total phrases added
    #[inline]
    pub fn total_count(&self) -> u64 {
        self.freq.total_term_count()
    }

    /// Top `n` phrases by count, ties in first-seen order
    pub fn most_common(&self, n: usize) -> Vec<PhraseCount> {
        self.freq
            .most_common(n)
            .into_iter()
            .map(|(phrase, count)| PhraseCount { phrase, count })
            .collect()
    }
}

impl<T> FromIterator<T> for PhraseAggregator
where
    T: AsRef<[String]>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut agg = Self::new();
        for doc in iter {
            agg.add_document(doc.as_ref());
        }
        agg
    }
}

/// Pooled phrase counts, top `n`
pub fn phrase_counts(phrase_lists: &[Vec<String>], n: usize) -> Vec<PhraseCount> {
    phrase_lists
        .iter()
        .collect::<PhraseAggregator>()
        .most_common(n)
}

/// Top `n` phrases across all documents
///
/// # Examples
/// ```
/// use keyword_extractor::phrase::top_phrases;
/// let docs = vec![
///     vec!["The Prime Minister".to_string(), "a speech".to_string()],
///     vec!["the prime minister".to_string()],
/// ];
/// assert_eq!(top_phrases(&docs, 1), vec!["the prime minister"]);
/// ```
pub fn top_phrases(phrase_lists: &[Vec<String>], n: usize) -> Vec<String> {
    phrase_counts(phrase_lists, n)
        .into_iter()
        .map(|pc| pc.phrase)
        .collect()
}

/// Chunk raw documents and return the top `n` phrases
pub fn top_noun_phrases<C, T>(chunker: &C, texts: &[T], n: usize) -> Vec<String>
where
    C: NounPhraseChunker + Sync + ?Sized,
    T: AsRef<str> + Sync,
{
    let phrase_lists = extract_bulk_noun_phrases(chunker, texts);
    tracing::debug!(docs = texts.len(), "noun phrases extracted");
    top_phrases(&phrase_lists, n)
}

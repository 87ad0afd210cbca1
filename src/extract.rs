use crate::{
    config::{ExtractorConfig, DEFAULT_MAX_DF},
    error::Result,
    phrase::{self, NounPhraseChunker},
    preprocess,
    vectorizer::{
        keyword::{into_terms, Keyword},
        term::TermFrequency,
        TFIDFVectorizer,
    },
};
use rayon::prelude::*;

/// Top `n` tokens by count, ties in first-occurrence order
///
/// # Examples
/// ```
/// use keyword_extractor::top_keywords;
/// let tokens = ["economy", "growth", "economy", "inflation", "growth", "economy"];
/// assert_eq!(top_keywords(&tokens, 2), vec!["economy", "growth"]);
/// ```
pub fn top_keywords<T>(tokens: &[T], n: usize) -> Vec<String>
where
    T: AsRef<str>,
{
    TermFrequency::from(tokens)
        .most_common(n)
        .into_iter()
        .map(|(term, _)| term)
        .collect()
}

/// `top_keywords` per token list, order preserved
pub fn bulk_top_keywords(token_lists: &[Vec<String>], n: usize) -> Vec<Vec<String>> {
    token_lists
        .par_iter()
        .map(|tokens| top_keywords(tokens, n))
        .collect()
}

/// Scored TF-IDF keywords per document (max_df 0.85)
pub fn tfidf_keywords_per_document<T>(raw_texts: &[T], n: usize) -> Result<Vec<Vec<Keyword>>>
where
    T: AsRef<str> + Sync,
{
    let model: TFIDFVectorizer = TFIDFVectorizer::fit(raw_texts, DEFAULT_MAX_DF)?;
    Ok(model.top_keywords_all_documents(n))
}

/// Scored TF-IDF keywords of the whole corpus (max_df 0.85)
pub fn tfidf_keywords_global<T>(raw_texts: &[T], n: usize) -> Result<Vec<Keyword>>
where
    T: AsRef<str> + Sync,
{
    let model: TFIDFVectorizer = TFIDFVectorizer::fit(raw_texts, DEFAULT_MAX_DF)?;
    Ok(model.top_keywords_global(n))
}

/// Top `n` TF-IDF terms per document
///
/// # Errors
/// `InvalidInput` when the corpus is empty or yields no vocabulary.
pub fn tfidf_top_keywords_per_document<T>(raw_texts: &[T], n: usize) -> Result<Vec<Vec<String>>>
where
    T: AsRef<str> + Sync,
{
    Ok(tfidf_keywords_per_document(raw_texts, n)?
        .into_iter()
        .map(into_terms)
        .collect())
}

/// Top `n` TF-IDF terms by summed weight over all documents
///
/// # Examples
/// ```
/// use keyword_extractor::tfidf_top_keywords_global;
/// let docs = ["python python python", "javascript javascript", "rust"];
/// let top = tfidf_top_keywords_global(&docs, 2).unwrap();
/// assert_eq!(top, vec!["javascript", "python"]);
/// ```
pub fn tfidf_top_keywords_global<T>(raw_texts: &[T], n: usize) -> Result<Vec<String>>
where
    T: AsRef<str> + Sync,
{
    tfidf_keywords_global(raw_texts, n).map(into_terms)
}

/// Keyword extractor bound to one validated `ExtractorConfig`
///
/// Every ranking call uses `config.top_n`, every TF-IDF fit uses `config.max_df`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor {
    config: ExtractorConfig,
}

impl KeywordExtractor {
    /// # Errors
    /// `Configuration` when `config` is invalid
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Clean, tokenize and drop stop words
    #[inline]
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        preprocess::preprocess(text)
    }

    #[inline]
    pub fn preprocess_bulk<T>(&self, texts: &[T]) -> Vec<Vec<String>>
    where
        T: AsRef<str> + Sync,
    {
        preprocess::preprocess_bulk(texts)
    }

    pub fn top_keywords<T>(&self, tokens: &[T]) -> Vec<String>
    where
        T: AsRef<str>,
    {
        top_keywords(tokens, self.config.top_n)
    }

    pub fn bulk_top_keywords(&self, token_lists: &[Vec<String>]) -> Vec<Vec<String>> {
        bulk_top_keywords(token_lists, self.config.top_n)
    }

    /// Fit a TF-IDF model with this extractor's `max_df`
    pub fn fit<T>(&self, raw_texts: &[T]) -> Result<TFIDFVectorizer>
    where
        T: AsRef<str> + Sync,
    {
        TFIDFVectorizer::fit(raw_texts, self.config.max_df)
    }

    pub fn tfidf_top_keywords_per_document<T>(&self, raw_texts: &[T]) -> Result<Vec<Vec<String>>>
    where
        T: AsRef<str> + Sync,
    {
        let model = self.fit(raw_texts)?;
        Ok(model
            .top_keywords_all_documents(self.config.top_n)
            .into_iter()
            .map(into_terms)
            .collect())
    }

    pub fn tfidf_top_keywords_global<T>(&self, raw_texts: &[T]) -> Result<Vec<String>>
    where
        T: AsRef<str> + Sync,
    {
        let model = self.fit(raw_texts)?;
        Ok(into_terms(model.top_keywords_global(self.config.top_n)))
    }

    pub fn top_phrases(&self, phrase_lists: &[Vec<String>]) -> Vec<String> {
        phrase::top_phrases(phrase_lists, self.config.top_n)
    }

    pub fn top_noun_phrases<C, T>(&self, chunker: &C, texts: &[T]) -> Vec<String>
    where
        C: NounPhraseChunker + Sync + ?Sized,
        T: AsRef<str> + Sync,
    {
        phrase::top_noun_phrases(chunker, texts, self.config.top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn frequency_ranking() {
        let tokens = ["a1", "b2", "a1", "c3", "b2", "a1"];
        assert_eq!(top_keywords(&tokens, 2), vec!["a1", "b2"]);
        assert_eq!(top_keywords(&tokens, 10), vec!["a1", "b2", "c3"]);
        assert!(top_keywords(&tokens, 0).is_empty());
        let none: [&str; 0] = [];
        assert!(top_keywords(&none, 3).is_empty());
    }

    #[test]
    fn frequency_ties_follow_first_occurrence() {
        let tokens = ["zeta", "alpha", "zeta", "alpha", "mid"];
        assert_eq!(top_keywords(&tokens, 3), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn bulk_matches_single() {
        let lists = vec![
            vec!["x".to_string(), "y".to_string(), "y".to_string()],
            vec![],
            vec!["q".to_string()],
        ];
        let bulk = bulk_top_keywords(&lists, 1);
        assert_eq!(bulk, vec![vec!["y".to_string()], vec![], vec!["q".to_string()]]);
    }

    #[test]
    fn tfidf_wrappers() {
        let docs = ["hello world", "foo bar baz"];
        let per_doc = tfidf_top_keywords_per_document(&docs, 2).unwrap();
        assert_eq!(per_doc, vec![vec!["hello", "world"], vec!["bar", "baz"]]);
        let empty: [&str; 0] = [];
        assert!(matches!(tfidf_top_keywords_per_document(&empty, 3), Err(Error::InvalidInput(_))));
        assert!(matches!(tfidf_top_keywords_global(&["the of and"], 3), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn extractor_uses_config() {
        let extractor = KeywordExtractor::new(ExtractorConfig::default().with_top_n(1)).unwrap();
        assert_eq!(extractor.top_keywords(&["b1", "a1", "a1"]), vec!["a1"]);
        let global = extractor
            .tfidf_top_keywords_global(&["python python python", "javascript javascript", "rust"])
            .unwrap();
        assert_eq!(global, vec!["javascript"]);
        assert!(matches!(
            KeywordExtractor::new(ExtractorConfig::default().with_max_df(2.0)),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn extractor_with_full_max_df_keeps_shared_terms() {
        let extractor = KeywordExtractor::new(ExtractorConfig::default().with_max_df(1.0)).unwrap();
        let model = extractor.fit(&["news today", "news tonight"]).unwrap();
        assert!(model.vocabulary.contains("news"));
    }
}

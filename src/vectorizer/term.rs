use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::sort::top_n_stable_by;

/// TermFrequency struct
/// Manages the frequency of term occurrences within one document
/// (or any multiset of strings, such as a flattened phrase list).
///
/// Terms keep their first-occurrence order, which is the tie-break order
/// of `most_common`.
///
/// # Examples
/// ```
/// use keyword_extractor::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_terms(&["rust", "safe", "rust"]);
///
/// assert_eq!(term_freq.term_count("rust"), 2);
/// assert_eq!(term_freq.most_common(1), vec![("rust".to_string(), 2)]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64, RandomState>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::with_hasher(RandomState::new()),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(terms);
        tf
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Iterate over terms and counts in first-occurrence order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Occurrence count of a term (0 if absent)
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Sum of all counts
    #[inline]
    pub fn total_term_count(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Distinct terms in first-occurrence order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// Up to `n` terms with their counts, most frequent first.
    /// Equal counts keep first-occurrence order.
    ///
    /// # Returns
    /// * `Vec<(String, u64)>` - terms and counts, descending by count
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let entries: Vec<(&String, u64)> = self.term_count.iter().map(|(t, &c)| (t, c)).collect();
        top_n_stable_by(entries, n, |a, b| b.1.cmp(&a.1))
            .into_iter()
            .map(|(term, count)| (term.clone(), count))
            .collect()
    }
}

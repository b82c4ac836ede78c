//! Bounded-vocabulary count vectorizer

use coursefinder_text::StopWords;
use std::collections::{BTreeMap, HashMap};

/// Tokens shorter than this never enter the vocabulary
const MIN_TOKEN_CHARS: usize = 2;

/// Selected tokens, column `i` of every count vector is `terms()[i]`.
///
/// Columns are in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    columns: HashMap<String, usize>,
}

impl Vocabulary {
    fn from_terms(mut terms: Vec<String>) -> Self {
        terms.sort();
        let columns = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { terms, columns }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// One count vector per document, stored as sorted `(column, count)` pairs
#[derive(Debug, Clone, PartialEq)]
pub struct CountVectors {
    width: usize,
    rows: Vec<Vec<(usize, u32)>>,
}

impl CountVectors {
    /// Vector length shared by all rows
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Non-zero entries of row `i`, ascending by column
    pub fn sparse_row(&self, i: usize) -> Option<&[(usize, u32)]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Row `i` expanded to a dense vector of [`Self::width`] counts
    pub fn dense_row(&self, i: usize) -> Option<Vec<u32>> {
        let row = self.rows.get(i)?;
        let mut dense = vec![0; self.width];
        for &(col, count) in row {
            dense[col] = count;
        }
        Some(dense)
    }
}

/// Counts vocabulary tokens per document.
///
/// The vocabulary keeps the `max_features` most frequent corpus tokens;
/// ties on frequency are broken lexicographically.
pub struct CountVectorizer {
    max_features: usize,
    stop_words: StopWords,
}

impl CountVectorizer {
    pub fn new(max_features: usize, stop_words: StopWords) -> Self {
        Self {
            max_features,
            stop_words,
        }
    }

    /// 5000 features, English stop words
    pub fn english() -> Self {
        Self::new(5000, StopWords::english())
    }

    fn tokens<'a>(&'a self, document: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        document
            .split_whitespace()
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|t| !self.stop_words.contains(t))
    }

    pub fn fit<S: AsRef<str>>(&self, documents: &[S]) -> Vocabulary {
        let mut frequency: BTreeMap<&str, u64> = BTreeMap::new();
        for doc in documents {
            for token in self.tokens(doc.as_ref()) {
                *frequency.entry(token).or_insert(0) += 1;
            }
        }

        // BTreeMap iterates lexicographically and sort_by is stable
        let mut ranked: Vec<(&str, u64)> = frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.max_features);

        Vocabulary::from_terms(ranked.into_iter().map(|(t, _)| t.to_string()).collect())
    }

    pub fn transform<S: AsRef<str>>(&self, vocabulary: &Vocabulary, documents: &[S]) -> CountVectors {
        let rows = documents
            .iter()
            .map(|doc| {
                let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
                for token in self.tokens(doc.as_ref()) {
                    if let Some(col) = vocabulary.column(token) {
                        *counts.entry(col).or_insert(0) += 1;
                    }
                }
                counts.into_iter().collect()
            })
            .collect();

        CountVectors {
            width: vocabulary.len(),
            rows,
        }
    }

    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> (Vocabulary, CountVectors) {
        let vocabulary = self.fit(documents);
        let vectors = self.transform(&vocabulary, documents);
        (vocabulary, vectors)
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_excludes_stop_words_and_short_tokens() {
        let v = CountVectorizer::english();
        let vocab = v.fit(&["the python course", "a rust course x"]);
        assert_eq!(vocab.terms(), &["course", "python", "rust"]);
    }

    #[test]
    fn test_counts_per_document() {
        let v = CountVectorizer::english();
        let (vocab, vectors) = v.fit_transform(&["data data science", "science art"]);
        assert_eq!(vocab.terms(), &["art", "data", "science"]);
        assert_eq!(vectors.width(), 3);
        assert_eq!(vectors.dense_row(0), Some(vec![0, 2, 1]));
        assert_eq!(vectors.dense_row(1), Some(vec![1, 0, 1]));
        assert_eq!(vectors.sparse_row(1), Some(&[(0, 1), (2, 1)][..]));
    }

    #[test]
    fn test_max_features_keeps_most_frequent_with_lexicographic_ties() {
        let v = CountVectorizer::new(2, StopWords::none());
        let vocab = v.fit(&["zeta zeta beta", "alpha gamma beta", "gamma"]);
        // beta=2, gamma=2, zeta=2, alpha=1: three-way tie resolved lexicographically
        assert_eq!(vocab.terms(), &["beta", "gamma"]);
    }

    #[test]
    fn test_width_is_min_of_bound_and_distinct_tokens() {
        let v = CountVectorizer::new(100, StopWords::none());
        let (vocab, vectors) = v.fit_transform(&["one two", "two three"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vectors.width(), 3);
    }

    #[test]
    fn test_out_of_vocabulary_tokens_are_dropped() {
        let v = CountVectorizer::new(1, StopWords::none());
        let (vocab, vectors) = v.fit_transform(&["common common rare"]);
        assert_eq!(vocab.terms(), &["common"]);
        assert_eq!(vectors.dense_row(0), Some(vec![2]));
    }

    #[test]
    fn test_all_stop_word_document_is_empty_row() {
        let v = CountVectorizer::english();
        let (_, vectors) = v.fit_transform(&["the and of", "python"]);
        assert_eq!(vectors.sparse_row(0), Some(&[][..]));
        assert_eq!(vectors.len(), 2);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let v = CountVectorizer::new(3, StopWords::none());
        let docs = ["b a c d", "d c b a", "e f g"];
        assert_eq!(v.fit(&docs), v.fit(&docs));
    }
}

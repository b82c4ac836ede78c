//! Canonical token stream for raw course text

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::sync::OnceLock;

static PUNCT_RE: OnceLock<Regex> = OnceLock::new();
static SPACE_RE: OnceLock<Regex> = OnceLock::new();

/// Rule-based stemming function applied to each token
pub trait Stem: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Snowball English (Porter2) stemmer
pub struct PorterStemmer {
    inner: Stemmer,
}

impl PorterStemmer {
    pub fn new() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stem for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

pub struct Normalizer {
    stemmer: Box<dyn Stem>,
}

impl Normalizer {
    pub fn new(stemmer: Box<dyn Stem>) -> Self {
        Self { stemmer }
    }

    /// English Porter2 stemming
    pub fn english() -> Self {
        Self::new(Box::new(PorterStemmer::new()))
    }

    /// Drop punctuation, lower-case and collapse whitespace, no stemming.
    ///
    /// Used on its own for categorical fields such as difficulty.
    pub fn clean(&self, text: &str) -> String {
        let punct = PUNCT_RE.get_or_init(|| Regex::new(r"[^\w\s]").unwrap());
        let space = SPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap());
        let stripped = punct.replace_all(text, "");
        let lowered = stripped.to_lowercase();
        space.replace_all(lowered.trim(), " ").into_owned()
    }

    /// [`Self::clean`] followed by stemming every token
    pub fn normalize(&self, text: &str) -> String {
        self.clean(text)
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(|token| self.stemmer.stem(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Stem for Upper {
        fn stem(&self, word: &str) -> String {
            word.to_uppercase()
        }
    }

    #[test]
    fn test_clean_strips_punctuation_and_whitespace() {
        let n = Normalizer::english();
        assert_eq!(n.clean("  Hello,   World!\n\tC++ & Rust "), "hello world c rust");
        assert_eq!(n.clean("snake_case stays"), "snake_case stays");
    }

    #[test]
    fn test_clean_empty() {
        let n = Normalizer::english();
        assert_eq!(n.clean(""), "");
        assert_eq!(n.clean("!!! ??"), "");
        assert_eq!(n.normalize("..."), "");
    }

    #[test]
    fn test_normalize_stems_tokens() {
        let n = Normalizer::english();
        assert_eq!(n.normalize("Running cats jumped"), "run cat jump");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let n = Normalizer::english();
        let text = "Studies in Machine Learning, Programming & Statistics";
        assert_eq!(n.normalize(text), n.normalize(text));
    }

    #[test]
    fn test_stemmer_is_swappable() {
        let n = Normalizer::new(Box::new(Upper));
        assert_eq!(n.normalize("Data, Science"), "DATA SCIENCE");
    }

    #[test]
    fn test_porter_stemmer() {
        let s = PorterStemmer::new();
        assert_eq!(s.stem("studies"), "studi");
        assert_eq!(s.stem("running"), "run");
        assert_eq!(s.stem("python"), "python");
    }
}

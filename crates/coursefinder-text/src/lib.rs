//! Text normalization, stemming, stop words and tag composition

mod normalize;
mod stopwords;
mod tag;

pub use normalize::{Normalizer, PorterStemmer, Stem};
pub use stopwords::StopWords;
pub use tag::compose_tag;

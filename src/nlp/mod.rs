//! Linguistic components: stop-word filtering, word tokenization,
//! lemmatization, and the text normalizer that composes them.

pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use lemmatizer::{EnglishLemmatizer, Lemmatizer, NoopLemmatizer, SnowballLemmatizer};
pub use normalizer::TextNormalizer;
pub use stopwords::StopwordFilter;

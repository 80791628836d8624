//! Keyword-sentence extraction and sentiment scoring for newspaper OCR
//! text.
//!
//! [`KeywordMatcher`] pulls the sentences around the query keywords out
//! of a record's full text; a [`SentimentScorer`] turns those sentences
//! into a (polarity, subjectivity) pair. The scorer is a trait boundary
//! so the scoring algorithm can be swapped without touching extraction;
//! [`LexiconScorer`] is the default implementation.

mod enrich;
mod error;
mod extract;
mod scorer;

pub use enrich::enrich_records;
pub use error::SentimentError;
pub use extract::KeywordMatcher;
pub use scorer::{LexiconScorer, Sentiment, SentimentScorer};

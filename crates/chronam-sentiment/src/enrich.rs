//! Record enrichment: extraction plus scoring, one record at a time.

use chronam_core::{EnrichedRecord, RawRecord};

use crate::extract::KeywordMatcher;
use crate::scorer::SentimentScorer;

/// Attaches key sentences and a sentiment score to each record.
///
/// The selected sentences of a record are joined with newlines into one
/// unit of text for scoring; a record with no matching sentence scores
/// whatever the scorer returns for empty input (neutral for
/// [`crate::LexiconScorer`]). Output order equals input order and every
/// record yields exactly one enriched record.
#[must_use]
pub fn enrich_records(
    records: Vec<RawRecord>,
    matcher: &KeywordMatcher,
    scorer: &dyn SentimentScorer,
) -> Vec<EnrichedRecord> {
    records
        .into_iter()
        .map(|record| {
            let key_sentences = matcher.key_sentences(&record.full_text);
            let sentiment = scorer.score(&key_sentences.join("\n"));
            EnrichedRecord {
                record,
                key_sentences,
                polarity: sentiment.polarity,
                subjectivity: sentiment.subjectivity,
            }
        })
        .collect()
}

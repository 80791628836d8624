use chrono::NaiveDate;

/// One newspaper-page search hit, normalized into the fixed column set.
///
/// Records carry no identity beyond their position in the result
/// sequence; duplicate hits are kept as-is. `full_text` is OCR output
/// and may be empty or garbled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub date: NaiveDate,
    pub state: String,
    pub county: String,
    pub city: String,
    pub title: String,
    pub full_text: String,
}

/// A [`RawRecord`] with its keyword-adjacent sentences and sentiment score.
///
/// Created once per record by the sentiment step; immutable afterwards.
#[derive(Debug, Clone)]
pub struct EnrichedRecord {
    pub record: RawRecord,
    /// Sentences containing a query keyword, in document order. May be
    /// empty when no sentence matched or the text was empty.
    pub key_sentences: Vec<String>,
    /// Negative-to-positive sentiment of the selected sentences, in
    /// `[-1.0, 1.0]`.
    pub polarity: f64,
    /// Factual-to-opinionated weight of the selected sentences, in
    /// `[0.0, 1.0]`.
    pub subjectivity: f64,
}

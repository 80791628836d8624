//! Extraction of keyword-adjacent sentences from OCR text.

use regex::{Regex, RegexBuilder};

use crate::error::SentimentError;

/// Whole-word, case-insensitive matcher over a query's keyword set.
///
/// A sentence is any maximal run of characters ending in a period;
/// whatever trails the last period is not a sentence and is discarded.
/// Boundaries are determined purely by the period character, so OCR
/// noise and abbreviations can mis-split sentences or hide keyword
/// matches. That is accepted, not corrected: the digitized corpus is
/// noisy and the selection only needs to be consistent, not clean.
pub struct KeywordMatcher {
    pattern: Regex,
}

impl KeywordMatcher {
    /// Compiles the matcher for a keyword set. Keywords are escaped, so
    /// regex metacharacters in a keyword match literally.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Pattern`] if the combined pattern does
    /// not compile.
    pub fn new(keywords: &[String]) -> Result<Self, SentimentError> {
        let alternation = keywords
            .iter()
            .map(|keyword| regex::escape(keyword))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern })
    }

    /// Returns the sentences of `text` containing any keyword as a
    /// whole word, in document order. Leading whitespace of a sentence
    /// is preserved; the terminating period is included.
    ///
    /// Empty text, or text in which no sentence matches, yields an
    /// empty sequence. Never fails.
    #[must_use]
    pub fn key_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for (period, _) in text.match_indices('.') {
            let sentence = &text[start..=period];
            if self.pattern.is_match(sentence) {
                sentences.push(sentence.to_owned());
            }
            start = period + 1;
        }
        sentences
    }
}

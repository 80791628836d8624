use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// The keyword pattern failed to compile. Keywords are escaped
    /// before compilation, so in practice this only fires on a pattern
    /// that exceeds the regex size limit.
    #[error("keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

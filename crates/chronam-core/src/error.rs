use thiserror::Error;

/// Errors raised when constructing [`crate::QueryParameters`].
///
/// Validation happens exactly once, at construction; a value that exists
/// is always valid.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The keyword list was empty (or a phrase reduced to nothing).
    #[error("query requires at least one keyword")]
    NoKeywords,

    /// A keyword was empty or whitespace-only.
    #[error("keyword at position {index} is empty")]
    EmptyKeyword { index: usize },

    /// `year_max` preceded `year_min`.
    #[error("invalid year range: {year_min}..={year_max}")]
    YearRange { year_min: i32, year_max: i32 },
}

/// Errors raised while assembling raw search hits into typed records.
///
/// Both variants indicate the remote service violated its response
/// contract; neither is transient, so neither is ever retried.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A required column was absent from a search hit.
    #[error("record {index} is missing required column \"{column}\"")]
    Schema { column: &'static str, index: usize },

    /// The `date` column could not be parsed into a calendar date.
    #[error("record {index} has unparseable date \"{value}\"")]
    DateParse { value: String, index: usize },
}

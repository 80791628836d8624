use crate::error::ValidationError;

/// Validated keyword and year constraints for one search query.
///
/// Constructed once per query and immutable afterwards. Keywords match
/// case-insensitively on the service side and in the sentence matcher;
/// they are stored here exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    keywords: Vec<String>,
    year_min: i32,
    year_max: i32,
}

impl QueryParameters {
    /// Validates and builds query parameters.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NoKeywords`] if `keywords` is empty.
    /// - [`ValidationError::EmptyKeyword`] if any keyword is empty or
    ///   whitespace-only.
    /// - [`ValidationError::YearRange`] if `year_max < year_min`.
    pub fn new(
        keywords: Vec<String>,
        year_min: i32,
        year_max: i32,
    ) -> Result<Self, ValidationError> {
        if keywords.is_empty() {
            return Err(ValidationError::NoKeywords);
        }
        for (index, keyword) in keywords.iter().enumerate() {
            if keyword.trim().is_empty() {
                return Err(ValidationError::EmptyKeyword { index });
            }
        }
        if year_max < year_min {
            return Err(ValidationError::YearRange { year_min, year_max });
        }
        Ok(Self {
            keywords,
            year_min,
            year_max,
        })
    }

    /// Builds query parameters from a single phrase, splitting it into
    /// keywords on runs of non-alphanumeric characters.
    ///
    /// # Errors
    ///
    /// Same as [`QueryParameters::new`]; a phrase with no alphanumeric
    /// content yields [`ValidationError::NoKeywords`].
    pub fn from_phrase(
        phrase: &str,
        year_min: i32,
        year_max: i32,
    ) -> Result<Self, ValidationError> {
        let keywords = phrase
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(str::to_owned)
            .collect();
        Self::new(keywords, year_min, year_max)
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn year_min(&self) -> i32 {
        self.year_min
    }

    #[must_use]
    pub fn year_max(&self) -> i32 {
        self.year_max
    }
}

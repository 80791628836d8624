//! Domain types for the Chronicling America news-sentiment pipeline.
//!
//! This crate owns the validated query parameters, the record types that
//! flow through the pipeline, and the assembly step that turns raw JSON
//! search hits into typed [`RawRecord`]s.

mod assemble;
mod error;
mod query;
mod records;

pub use assemble::assemble;
pub use error::{AssemblyError, ValidationError};
pub use query::QueryParameters;
pub use records::{EnrichedRecord, RawRecord};

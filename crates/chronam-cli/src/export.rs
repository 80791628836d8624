//! CSV export and the per-batch run log.
//!
//! Quoting is RFC-4180 style: a field is quoted when it contains the
//! delimiter, a quote, or a newline, and embedded quotes are doubled.
//! A record's key sentences are newline-joined inside a single field.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::Path;

use chronam_core::EnrichedRecord;

const RECORD_HEADER: &str =
    "date,state,county,city,title,full_text,key_sentences,polarity,subjectivity";
const LOG_HEADER: &str = "path,keywords,year_min,year_max,n_collected,n_available,task_time_s";

/// One appended row of the run log, written after each completed batch.
pub struct RunLogEntry<'a> {
    pub path: &'a Path,
    pub keywords: &'a [String],
    pub year_min: i32,
    pub year_max: i32,
    pub n_collected: u64,
    pub n_available: u64,
    pub task_time_s: f64,
}

/// Writes one batch of enriched records to `path`, header included.
///
/// # Errors
///
/// Propagates the underlying filesystem error.
pub fn write_records(path: &Path, records: &[EnrichedRecord]) -> io::Result<()> {
    let mut body = String::with_capacity(records.len() * 256);
    body.push_str(RECORD_HEADER);
    body.push('\n');
    for record in records {
        body.push_str(&record_row(record));
        body.push('\n');
    }
    std::fs::write(path, body)
}

/// Appends one row to the run log, creating the file (with its header)
/// on first use.
///
/// # Errors
///
/// Propagates the underlying filesystem error.
pub fn append_run_log(log_path: &Path, entry: &RunLogEntry<'_>) -> io::Result<()> {
    let is_new = !log_path.exists();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    if is_new {
        writeln!(file, "{LOG_HEADER}")?;
    }
    writeln!(file, "{}", log_row(entry))
}

fn record_row(record: &EnrichedRecord) -> String {
    let mut row = String::new();
    let fields = [
        record.record.date.format("%Y-%m-%d").to_string(),
        record.record.state.clone(),
        record.record.county.clone(),
        record.record.city.clone(),
        record.record.title.clone(),
        record.record.full_text.clone(),
        record.key_sentences.join("\n"),
    ];
    for field in &fields {
        let _ = write!(row, "{},", csv_field(field));
    }
    let _ = write!(row, "{},{}", record.polarity, record.subjectivity);
    row
}

fn log_row(entry: &RunLogEntry<'_>) -> String {
    format!(
        "{},{},{},{},{},{},{:.2}",
        csv_field(&entry.path.display().to_string()),
        csv_field(&entry.keywords.join(" ")),
        entry.year_min,
        entry.year_max,
        entry.n_collected,
        entry.n_available,
        entry.task_time_s,
    )
}

fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

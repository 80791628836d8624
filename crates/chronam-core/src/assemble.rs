//! Normalization of raw search hits into typed [`RawRecord`]s.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::AssemblyError;
use crate::records::RawRecord;

/// The fixed column set selected from each search hit. `ocr_eng` is the
/// service's name for the OCR-derived page text.
const COLUMNS: [&str; 6] = ["date", "state", "county", "city", "title", "ocr_eng"];

/// Normalizes raw JSON search hits into [`RawRecord`]s, preserving order.
///
/// Selects the fixed column set and parses `date` into a calendar date.
/// The service emits `YYYYMMDD` dates; `YYYY-MM-DD` is accepted as well.
/// Place and title fields may arrive as a string, a string array (joined
/// with `"; "`), or null (treated as empty).
///
/// # Errors
///
/// - [`AssemblyError::Schema`] if a hit is missing a required column.
/// - [`AssemblyError::DateParse`] if a hit's date cannot be parsed,
///   naming the offending record's position.
pub fn assemble(items: &[Value]) -> Result<Vec<RawRecord>, AssemblyError> {
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        for column in COLUMNS {
            if item.get(column).is_none() {
                return Err(AssemblyError::Schema { column, index });
            }
        }
        let date_text = text_field(item, "date");
        let date = parse_date(&date_text).ok_or_else(|| AssemblyError::DateParse {
            value: date_text.clone(),
            index,
        })?;
        records.push(RawRecord {
            date,
            state: text_field(item, "state"),
            county: text_field(item, "county"),
            city: text_field(item, "city"),
            title: text_field(item, "title"),
            full_text: text_field(item, "ocr_eng"),
        });
    }
    Ok(records)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

/// Flattens a column value to text. Arrays of strings are joined with
/// `"; "`; null and non-string scalars inside arrays are skipped.
fn text_field(item: &Value, column: &str) -> String {
    match item.get(column) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(parts)) => parts
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

//! Splitting a requested year span into consecutive export batches.

/// Returns the inclusive year sub-ranges covering `year_min..=year_max`
/// in steps of `increment` years. The last batch clamps to `year_max`,
/// so batches never extend past the requested span. `increment` must be
/// positive (the caller validates).
pub fn year_batches(year_min: i32, year_max: i32, increment: i32) -> Vec<(i32, i32)> {
    let mut batches = Vec::new();
    let mut start = year_min;
    while start <= year_max {
        batches.push((start, (start + increment - 1).min(year_max)));
        start += increment;
    }
    batches
}

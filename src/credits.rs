//! Credit arithmetic over course rows.
//!
//! Credits are stored as text. A value that does not start with a number
//! counts as zero instead of failing the whole request.

use crate::models::academic_course::AcademicCourse;

/// Parse the leading decimal number of `raw`, or return `0.0`.
///
/// Leading whitespace is skipped and trailing text is ignored, so `"3 cr"`
/// reads as `3.0`. Non-finite spellings such as `"NaN"` or `"inf"` read as
/// `0.0`.
pub fn parse_credits(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let candidate_len = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map_or(trimmed.len(), |(idx, _)| idx);
    let candidate = &trimmed[..candidate_len];

    // Every char in `candidate` is ASCII, so each byte offset is a boundary.
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Sum the parsed credits of every course.
pub fn total_credits(courses: &[AcademicCourse]) -> f64 {
    courses
        .iter()
        .map(|course| parse_credits(&course.credits))
        .sum()
}

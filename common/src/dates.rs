//! Date normalization for spreadsheet imports.
//!
//! Imported sheets mix native date cells, raw Excel serial numbers and
//! several textual layouts. Everything is normalized to `DD/MM/YYYY` once,
//! at ingestion, so display, validation and export all read one format.
//!
//! Notes:
//! - Excel stores dates as serial numbers (days since a base date).
//! - The 1900 date system carries the historical leap-year bug: the
//!   non-existent day 1900-02-29 occupies serial 60.

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;

/// Numbers at or below this are plain numbers, not date serials.
pub const SERIAL_DATE_FLOOR: f64 = 30000.0;

/// A raw spreadsheet cell value as handed over by a file reader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    /// A native date cell, already resolved to calendar fields.
    Date { year: i32, month: u32, day: u32 },
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Plain display text of the cell, with no date interpretation.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Date { year, month, day } => format_dmy(*year, *month, *day),
            CellValue::Number(n) => number_text(*n),
            CellValue::Text(s) => s.trim().to_string(),
        }
    }
}

/// Convert one raw cell value into the canonical `DD/MM/YYYY` form.
///
/// Best effort: when no valid calendar date can be derived, the trimmed
/// textual form of the input comes back unchanged, and empty input yields
/// an empty string. Never fails.
pub fn normalize_date_value(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Date { year, month, day } => format_dmy(*year, *month, *day),
        CellValue::Number(n) if *n > SERIAL_DATE_FLOOR => match serial_to_ymd(*n as i64) {
            Some((y, m, d)) => format_dmy(y, m, d),
            None => number_text(*n),
        },
        CellValue::Number(n) => number_text(*n),
        CellValue::Text(raw) => normalize_date_text(raw),
    }
}

/// Check a user-entered date field.
///
/// An empty or whitespace-only value passes (the field is optional).
/// Anything else must be a slash-separated `D/M/YYYY` shape naming a real
/// calendar date. Hyphen separators are rejected here even though import
/// normalization accepts them.
pub fn is_valid_date(value: &str) -> bool {
    if value.trim().is_empty() {
        return true;
    }
    let shape = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap();
    let Some(caps) = shape.captures(value) else {
        return false;
    };
    let day: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Decode an Excel 1900-system date serial into calendar fields.
///
/// Serial 60 is the fictional 1900-02-29 kept for Lotus 1-2-3
/// compatibility; serials above it sit one day ahead of the Gregorian
/// count from the 1899-12-31 base.
pub fn serial_to_ymd(serial: i64) -> Option<(i32, u32, u32)> {
    if serial == 60 {
        return Some((1900, 2, 29));
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 31)?;
    let adjusted = if serial > 60 { serial - 1 } else { serial };
    let date = base.checked_add_signed(Duration::days(adjusted))?;
    Some((date.year(), date.month(), date.day()))
}

fn normalize_date_text(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        return String::new();
    }

    let ymd = Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})$").unwrap();
    let dmy = Regex::new(r"^(\d{1,2})[-/](\d{1,2})[-/](\d{4})$").unwrap();

    let fields = if let Some(caps) = ymd.captures(text) {
        Some((cap_num(&caps, 1), cap_num(&caps, 2) as u32, cap_num(&caps, 3) as u32))
    } else if let Some(caps) = dmy.captures(text) {
        Some((cap_num(&caps, 3), cap_num(&caps, 2) as u32, cap_num(&caps, 1) as u32))
    } else {
        None
    };

    match fields {
        Some((year, month, day)) if NaiveDate::from_ymd_opt(year, month, day).is_some() => {
            format_dmy(year, month, day)
        }
        // Unknown layout or an impossible calendar date: keep the raw text
        // so the editor shows it and the validator flags it.
        _ => text.to_string(),
    }
}

fn format_dmy(year: i32, month: u32, day: u32) -> String {
    format!("{:02}/{:02}/{}", day, month, year)
}

fn number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn cap_num(caps: &regex::Captures<'_>, idx: usize) -> i32 {
    caps[idx].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_shape_of_one_date_normalizes_identically() {
        let shapes = [
            CellValue::Date { year: 2000, month: 1, day: 1 },
            CellValue::Number(36526.0),
            CellValue::Text("2000-01-01".to_string()),
            CellValue::Text("2000/1/1".to_string()),
            CellValue::Text("1-1-2000".to_string()),
            CellValue::Text(" 01/01/2000 ".to_string()),
        ];
        for shape in &shapes {
            assert_eq!(normalize_date_value(shape), "01/01/2000", "shape {:?}", shape);
        }
    }

    #[test]
    fn empty_inputs_normalize_to_empty_string() {
        assert_eq!(normalize_date_value(&CellValue::Empty), "");
        assert_eq!(normalize_date_value(&CellValue::Text(String::new())), "");
        assert_eq!(normalize_date_value(&CellValue::Text("   ".to_string())), "");
    }

    #[test]
    fn impossible_calendar_dates_fall_through_to_raw_text() {
        assert_eq!(
            normalize_date_value(&CellValue::Text("31/02/2026".to_string())),
            "31/02/2026"
        );
        assert_eq!(
            normalize_date_value(&CellValue::Text(" 2026-13-01 ".to_string())),
            "2026-13-01"
        );
    }

    #[test]
    fn unrecognized_text_comes_back_trimmed() {
        assert_eq!(normalize_date_value(&CellValue::Text("  besok  ".to_string())), "besok");
        assert_eq!(normalize_date_value(&CellValue::Text("19/02".to_string())), "19/02");
    }

    #[test]
    fn numbers_at_or_below_the_floor_are_not_serials() {
        assert_eq!(normalize_date_value(&CellValue::Number(30000.0)), "30000");
        assert_eq!(normalize_date_value(&CellValue::Number(7.0)), "7");
    }

    #[test]
    fn fractional_serials_drop_the_time_of_day() {
        assert_eq!(normalize_date_value(&CellValue::Number(36526.5)), "01/01/2000");
    }

    #[test]
    fn serial_decoding_keeps_the_1900_leap_day() {
        assert_eq!(serial_to_ymd(59), Some((1900, 2, 28)));
        assert_eq!(serial_to_ymd(60), Some((1900, 2, 29)));
        assert_eq!(serial_to_ymd(61), Some((1900, 3, 1)));
        assert_eq!(serial_to_ymd(36526), Some((2000, 1, 1)));
        assert_eq!(serial_to_ymd(45658), Some((2025, 1, 1)));
    }

    #[test]
    fn validator_truth_table() {
        assert!(is_valid_date(""));
        assert!(is_valid_date("   "));
        assert!(is_valid_date("29/02/2024"));
        assert!(!is_valid_date("29/02/2026"));
        assert!(is_valid_date("5/5/2026"));
        assert!(!is_valid_date("05-05-2026"));
        assert!(!is_valid_date("31/02/2026"));
        assert!(!is_valid_date("19/02/26"));
        assert!(!is_valid_date(" 5/5/2026"));
    }

    #[test]
    fn validator_rejects_hyphens_the_normalizer_accepts() {
        let hyphenated = CellValue::Text("05-05-2026".to_string());
        assert_eq!(normalize_date_value(&hyphenated), "05/05/2026");
        assert!(!is_valid_date("05-05-2026"));
    }

    #[test]
    fn cell_display_text_never_interprets_dates() {
        assert_eq!(CellValue::Number(36526.0).display_text(), "36526");
        assert_eq!(CellValue::Text("  Andi ".to_string()).display_text(), "Andi");
        assert_eq!(CellValue::Empty.display_text(), "");
        assert_eq!(
            CellValue::Date { year: 2026, month: 2, day: 19 }.display_text(),
            "19/02/2026"
        );
    }
}

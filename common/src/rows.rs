//! Spreadsheet row to record mapping.
//!
//! Import rows arrive as `(header, cell)` pairs in sheet column order.
//! Date columns are sniffed by header text; the remaining fields are looked
//! up under the known header spellings of the distributed template.

use crate::dates::{CellValue, normalize_date_value};
use crate::model::record::{DEFAULT_DONATION_KIND, DonationRecord};
use uuid::Uuid;

const NO_HEADERS: [&str; 2] = ["No", "no"];
const NAME_HEADERS: [&str; 4] = ["Nama", "nama", "Name", "Nama Donatur"];
const KIND_HEADERS: [&str; 3] = ["Jenis", "jenis", "Jenis Sumbangan"];

/// Substring marking a date column, matched against the lowercased header.
const DATE_HEADER_MARK: &str = "tanggal";

/// Map one imported row to a fresh record.
///
/// Every column whose header contains the date mark contributes its
/// normalized value, in column order, skipping empties; a row without any
/// gets a single empty date slot so the editor can render it. `index` is
/// the zero-based row position, used when no sequence column is present.
pub fn record_from_row(cells: &[(String, CellValue)], index: usize) -> DonationRecord {
    let mut dates: Vec<String> = Vec::new();
    for (header, value) in cells {
        if header.to_lowercase().trim().contains(DATE_HEADER_MARK) {
            let formatted = normalize_date_value(value);
            if !formatted.is_empty() {
                dates.push(formatted);
            }
        }
    }
    if dates.is_empty() {
        dates.push(String::new());
    }

    DonationRecord {
        id: Uuid::new_v4().to_string(),
        no: lookup(cells, &NO_HEADERS).unwrap_or_else(|| (index + 1).to_string()),
        name: lookup(cells, &NAME_HEADERS).unwrap_or_default(),
        dates,
        kind: lookup(cells, &KIND_HEADERS).unwrap_or_else(|| DEFAULT_DONATION_KIND.to_string()),
    }
}

/// First non-empty cell found under any of the given header spellings.
fn lookup(cells: &[(String, CellValue)], headers: &[&str]) -> Option<String> {
    for wanted in headers {
        for (header, value) in cells {
            if header.trim() == *wanted {
                let text = value.display_text();
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn row(cells: &[(&str, CellValue)]) -> Vec<(String, CellValue)> {
        cells
            .iter()
            .map(|(h, v)| (h.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn collects_every_date_column_in_order() {
        let cells = row(&[
            ("No", CellValue::Number(3.0)),
            ("Nama", text("SYAMBIAH")),
            ("Tanggal Pertama", text("2026-02-19")),
            ("tanggal kedua", CellValue::Number(36526.0)),
            ("Jenis Sumbangan", text("Makanan")),
        ]);
        let record = record_from_row(&cells, 0);
        assert_eq!(record.no, "3");
        assert_eq!(record.name, "SYAMBIAH");
        assert_eq!(record.dates, vec!["19/02/2026", "01/01/2000"]);
        assert_eq!(record.kind, "Makanan");
    }

    #[test]
    fn empty_date_cells_are_skipped() {
        let cells = row(&[
            ("Tanggal 1", text("19/02/2026")),
            ("Tanggal 2", CellValue::Empty),
            ("Tanggal 3", text("06/03/2026")),
        ]);
        let record = record_from_row(&cells, 0);
        assert_eq!(record.dates, vec!["19/02/2026", "06/03/2026"]);
    }

    #[test]
    fn rows_without_date_columns_get_one_empty_slot() {
        let cells = row(&[("Nama", text("ANGGIN"))]);
        let record = record_from_row(&cells, 4);
        assert_eq!(record.dates, vec![String::new()]);
        assert_eq!(record.no, "5");
        assert_eq!(record.kind, DEFAULT_DONATION_KIND);
    }

    #[test]
    fn name_headers_are_tried_in_priority_order() {
        let cells = row(&[
            ("Nama Donatur", text("IBU SINTA")),
            ("Name", text("shadowed")),
        ]);
        assert_eq!(record_from_row(&cells, 0).name, "shadowed");

        let cells = row(&[("Nama Donatur", text("IBU SINTA"))]);
        assert_eq!(record_from_row(&cells, 0).name, "IBU SINTA");
    }

    #[test]
    fn unparseable_date_text_is_kept_raw() {
        let cells = row(&[("Tanggal 1", text("31/02/2026"))]);
        assert_eq!(record_from_row(&cells, 0).dates, vec!["31/02/2026"]);
    }

    #[test]
    fn every_imported_row_gets_a_fresh_id() {
        let cells = row(&[("Nama", text("A"))]);
        let a = record_from_row(&cells, 0);
        let b = record_from_row(&cells, 0);
        assert_ne!(a.id, b.id);
    }
}

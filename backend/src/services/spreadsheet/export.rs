use crate::store;
use actix_web::{HttpResponse, Responder};
use common::model::record::DonationRecord;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// Export column order; the headers are ones the importer maps back.
pub(crate) const EXPORT_HEADERS: [&str; 6] = [
    "No",
    "Nama Donatur",
    "Tanggal 1",
    "Tanggal 2",
    "Tanggal Lainnya",
    "Jenis",
];

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Handler for `GET /api/spreadsheet/export`.
pub async fn process() -> impl Responder {
    let records = store::load_records();
    let header = store::load_header();
    match build_workbook(&records) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(XLSX_MIME)
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"{}\"",
                    export_filename(&header.mosque_name)
                ),
            ))
            .body(bytes),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Gagal membuat file Excel: {}", e)),
    }
}

fn build_workbook(records: &[DonationRecord]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Data_Donatur")?;

    for (col, title) in EXPORT_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let cells = export_cells(record);

        // Numeric sequence numbers stay numbers in the sheet.
        match record.no.trim().parse::<f64>() {
            Ok(n) => sheet.write_number(row, 0, n)?,
            Err(_) => sheet.write_string(row, 0, record.no.as_str())?,
        };
        for (col, value) in cells.iter().enumerate().skip(1) {
            sheet.write_string(row, col as u16, value.as_str())?;
        }
    }

    workbook.save_to_buffer()
}

/// Row values in export column order; the first two dates get their own
/// columns, the rest collapse into one comma-joined cell.
pub(crate) fn export_cells(record: &DonationRecord) -> [String; 6] {
    [
        record.no.clone(),
        record.name.clone(),
        record.dates.first().cloned().unwrap_or_default(),
        record.dates.get(1).cloned().unwrap_or_default(),
        record
            .dates
            .get(2..)
            .map(|rest| rest.join(", "))
            .unwrap_or_default(),
        record.kind.clone(),
    ]
}

/// `Jadwal_Tajil_<mosque>.xlsx` with whitespace runs collapsed to `_`.
fn export_filename(mosque_name: &str) -> String {
    let compact = mosque_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("Jadwal_Tajil_{}.xlsx", compact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::dates::CellValue;
    use common::rows::record_from_row;

    fn sample_record() -> DonationRecord {
        let mut record = DonationRecord::new(7);
        record.name = "SYAMBIAH".to_string();
        record.dates = vec![
            "19/02/2026".to_string(),
            "06/03/2026".to_string(),
            "20/03/2026".to_string(),
        ];
        record.kind = "Makanan".to_string();
        record
    }

    #[test]
    fn exported_rows_reimport_equivalently() {
        let record = sample_record();
        let cells: Vec<(String, CellValue)> = EXPORT_HEADERS
            .iter()
            .zip(export_cells(&record))
            .map(|(header, value)| {
                let cell = if value.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(value)
                };
                (header.to_string(), cell)
            })
            .collect();

        let back = record_from_row(&cells, 0);
        assert_eq!(back.no, record.no);
        assert_eq!(back.name, record.name);
        assert_eq!(back.kind, record.kind);
        assert_eq!(back.dates[0], record.dates[0]);
        assert_eq!(back.dates[1], record.dates[1]);
        // Ids are regenerated on import.
        assert_ne!(back.id, record.id);
    }

    #[test]
    fn missing_dates_export_as_empty_cells() {
        let record = DonationRecord::new(1);
        let cells = export_cells(&record);
        assert_eq!(cells[2], "");
        assert_eq!(cells[3], "");
        assert_eq!(cells[4], "");
    }

    #[test]
    fn trailing_dates_collapse_into_one_cell() {
        let record = sample_record();
        assert_eq!(export_cells(&record)[4], "20/03/2026");

        let mut longer = sample_record();
        longer.dates.push("27/03/2026".to_string());
        assert_eq!(export_cells(&longer)[4], "20/03/2026, 27/03/2026");
    }

    #[test]
    fn workbook_building_succeeds_for_seed_data() {
        let bytes = build_workbook(&common::model::record::example_records()).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn export_filename_carries_the_mosque_name() {
        assert_eq!(
            export_filename("MESJID  NURUL HUDA"),
            "Jadwal_Tajil_MESJID_NURUL_HUDA.xlsx"
        );
    }
}

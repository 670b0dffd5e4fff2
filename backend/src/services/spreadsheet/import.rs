use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::Datelike;
use common::dates::CellValue;
use common::model::record::DonationRecord;
use common::rows::record_from_row;
use futures_util::StreamExt;
use std::io::Cursor;

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `200 OK` with the mapped records as JSON.
/// - On failure: `400 Bad Request` with the error message; stored state is
///   untouched because this handler never writes.
pub async fn process(payload: Multipart) -> impl Responder {
    match import_records(payload).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => HttpResponse::BadRequest().body(format!("Gagal membaca file: {}", e)),
    }
}

/// Reads the uploaded `file` part and maps its rows to donor records.
async fn import_records(
    mut payload: Multipart,
) -> Result<Vec<DonationRecord>, Box<dyn std::error::Error>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let part_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if part_name.as_deref() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_lowercase()))
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }
        upload = Some((filename, bytes));
    }

    let (filename, bytes) = upload.ok_or("Bagian file tidak ditemukan")?;
    let rows = if filename.ends_with(".csv") {
        csv_rows(&bytes)?
    } else if filename.ends_with(".xlsx") || filename.ends_with(".xls") {
        sheet_rows(bytes)?
    } else {
        return Err("File harus berakhiran .xlsx, .xls atau .csv".into());
    };

    Ok(rows
        .iter()
        .enumerate()
        .map(|(index, cells)| record_from_row(cells, index))
        .collect())
}

/// First sheet of a workbook as `(header, cell)` rows in column order.
fn sheet_rows(bytes: Vec<u8>) -> Result<Vec<Vec<(String, CellValue)>>, Box<dyn std::error::Error>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or("Workbook tidak memiliki sheet")??;

    let mut sheet_iter = range.rows();
    let headers: Vec<String> = match sheet_iter.next() {
        Some(first) => first.iter().map(|c| convert_cell(c).display_text()).collect(),
        None => return Ok(Vec::new()),
    };

    Ok(sheet_iter
        .map(|row| {
            headers
                .iter()
                .zip(row.iter())
                .map(|(header, cell)| (header.clone(), convert_cell(cell)))
                .collect()
        })
        .collect())
}

/// CSV rows as `(header, cell)` pairs; all cells arrive as text.
fn csv_rows(bytes: &[u8]) -> Result<Vec<Vec<(String, CellValue)>>, Box<dyn std::error::Error>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let cells = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let cell = match record.get(i) {
                    Some(value) if !value.trim().is_empty() => {
                        CellValue::Text(value.to_string())
                    }
                    _ => CellValue::Empty,
                };
                (header.clone(), cell)
            })
            .collect();
        rows.push(cells);
    }
    Ok(rows)
}

/// Lower a calamine cell into the shared raw-cell type. Native date cells
/// resolve to calendar fields through the reader's own serial rule; ones it
/// cannot place fall back to the raw serial number.
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(when) => CellValue::Date {
                year: when.year(),
                month: when.month(),
                day: when.day(),
            },
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_pair_cells_with_their_headers() {
        let data = b"No,Nama,Tanggal 1,Jenis\n1,SYAMBIAH,19/02/2026,Makanan\n2,ANGGIN,,\n";
        let rows = csv_rows(data).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], ("Nama".to_string(), CellValue::Text("SYAMBIAH".to_string())));
        assert_eq!(rows[1][2].1, CellValue::Empty);
    }

    #[test]
    fn csv_import_maps_to_records() {
        let data = b"No,Nama,Tanggal 1,Tanggal 2,Jenis\n7,SINTA,2026-02-19,06/03/2026,Uang\n";
        let rows = csv_rows(data).unwrap();
        let records: Vec<_> = rows
            .iter()
            .enumerate()
            .map(|(i, cells)| record_from_row(cells, i))
            .collect();
        assert_eq!(records[0].no, "7");
        assert_eq!(records[0].name, "SINTA");
        assert_eq!(records[0].dates, vec!["19/02/2026", "06/03/2026"]);
        assert_eq!(records[0].kind, "Uang");
    }

    #[test]
    fn short_csv_rows_pad_with_empty_cells() {
        let data = b"Nama,Tanggal 1\nBARE\n";
        let rows = csv_rows(data).unwrap();
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0][1].1, CellValue::Empty);
    }
}

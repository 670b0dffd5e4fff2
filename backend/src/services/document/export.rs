//! Word-processor document export.
//!
//! Emits the record list as a fixed HTML table wrapped in the Office
//! namespaces, which word processors open as a native document. One row per
//! record, all dates joined by comma. This is the static counterpart of the
//! print preview: no pagination, just the full list under the configured
//! header texts.

use crate::store;
use actix_web::{HttpResponse, Responder};
use common::model::header::HeaderConfig;
use common::model::record::DonationRecord;

/// Handler for `GET /api/document/export`.
pub async fn process() -> impl Responder {
    let records = store::load_records();
    let header = store::load_header();
    HttpResponse::Ok()
        .content_type("application/msword; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"Jadwal_Tajil.doc\"",
        ))
        .body(build_document(&records, &header))
}

fn build_document(records: &[DonationRecord], header: &HeaderConfig) -> String {
    let mut out = String::new();
    out.push_str(
        "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
         xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
         xmlns=\"http://www.w3.org/TR/REC-html40\">",
    );
    out.push_str("<head><meta charset=\"utf-8\"/><title>Jadwal Ta'jil</title></head><body>");

    out.push_str(&format!(
        "<p align=\"center\"><b>{}</b></p>",
        escape_html(&header.sub_header)
    ));
    out.push_str(&format!(
        "<p align=\"center\">{} &mdash; {} / {}</p>",
        escape_html(&header.mosque_name),
        escape_html(&header.hijri_year),
        escape_html(&header.masehi_year)
    ));

    out.push_str("<table border=\"1\" cellspacing=\"0\" cellpadding=\"4\" width=\"100%\">");
    out.push_str(
        "<tr><th>No</th><th>Nama Donatur</th><th>Jadwal Tanggal</th><th>Jenis</th></tr>",
    );
    for record in records {
        out.push_str(&format!(
            "<tr><td align=\"center\">{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&record.no),
            escape_html(&record.name),
            escape_html(&record.dates.join(", ")),
            escape_html(&record.kind)
        ));
    }
    out.push_str("</table>");

    out.push_str(&format!(
        "<p><i>{}</i></p>",
        escape_html(&header.top_header)
    ));
    out.push_str("</body></html>");
    out
}

/// Escapes special HTML characters so record texts cannot break the table.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_holds_one_row_per_record_with_joined_dates() {
        let mut record = DonationRecord::new(1);
        record.name = "SYAMBIAH".to_string();
        record.dates = vec!["19/02/2026".to_string(), "06/03/2026".to_string()];

        let html = build_document(&[record], &HeaderConfig::default());
        assert!(html.contains("19/02/2026, 06/03/2026"));
        assert!(html.contains("SYAMBIAH"));
        assert!(html.contains("urn:schemas-microsoft-com:office:word"));
    }

    #[test]
    fn record_text_is_escaped() {
        let mut record = DonationRecord::new(1);
        record.name = "A <b>&</b>".to_string();
        let html = build_document(&[record], &HeaderConfig::default());
        assert!(html.contains("A &lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!html.contains("<b>&</b>"));
    }
}

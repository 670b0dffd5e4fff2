//! Spreadsheet import and export.
//!
//! The provided routes are:
//! - `POST /api/spreadsheet/import`: multipart upload of an `.xlsx`, `.xls`
//!   or `.csv` file. The first sheet is read, every row is mapped to a
//!   donor record (date columns sniffed by header, dates normalized to
//!   `DD/MM/YYYY`), and the mapped records come back as JSON. Nothing is
//!   persisted here: the editor confirms the replacement with the user and
//!   saves explicitly, so a failed parse never touches stored state.
//!
//! - `GET /api/spreadsheet/export`: the current record list as an `.xlsx`
//!   workbook with the fixed export columns; the download name carries the
//!   configured mosque name.
//!
//! - `GET /api/spreadsheet/template`: a one-row example workbook showing
//!   the header spellings the importer understands.

mod export;
mod import;
mod template;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/spreadsheet";

/// Configures and returns the Actix scope for the spreadsheet routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/import", post().to(import::process))
        .route("/export", get().to(export::process))
        .route("/template", get().to(template::process))
}

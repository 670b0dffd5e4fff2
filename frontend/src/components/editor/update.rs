//! Update function for the donor record editor.
//!
//! Elm-style: receives the current `EditorComponent` state, the `Context`
//! and a `Msg`, mutates the state and returns whether the view should
//! re-render.
//!
//! Key behaviors
//! - Every record or header mutation immediately POSTs the full blob to the
//!   backend (persist-on-change); failures surface as toasts and keep the
//!   in-memory state.
//! - Destructive operations (clear-all, replace-on-import) sit behind a
//!   blocking `window.confirm` prompt.
//! - Header edits go into a draft copy that only overwrites the canonical
//!   config on an explicit save.
//! - The spreadsheet upload posts the file as multipart form data; the
//!   mapped records replace local state only after the backend parsed the
//!   whole file successfully.

use gloo_console::error;
use gloo_net::http::Request;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::record::{next_no, DonationRecord};

use super::helpers::show_toast;
use super::messages::{HeaderField, Msg};
use super::state::EditorComponent;

/// Central update function for the component.
pub fn update(component: &mut EditorComponent, ctx: &Context<EditorComponent>, msg: Msg) -> bool {
    match msg {
        Msg::RecordsLoaded(records) => {
            component.records = records;
            set_window_dirty_flag(component);
            true
        }
        Msg::HeaderLoaded(header) => {
            component.header = header;
            true
        }
        Msg::TogglePrint => {
            component.show_print = !component.show_print;
            true
        }
        Msg::SetSearch(query) => {
            component.search_query = query;
            true
        }
        Msg::SetPerPage(per_page) => {
            component.per_page = per_page.max(1);
            true
        }
        Msg::AddRow => {
            let no = next_no(&component.records);
            component.records.push(DonationRecord::new(no));
            persist_records(component);
            true
        }
        Msg::DeleteRow(id) => {
            component.records.retain(|r| r.id != id);
            persist_records(component);
            true
        }
        Msg::ClearAll => {
            if !confirm("Hapus seluruh data?") {
                return false;
            }
            component.records.clear();
            persist_records(component);
            true
        }
        Msg::UpdateNo(id, value) => {
            with_record(component, &id, |r| r.no = value);
            persist_records(component);
            true
        }
        Msg::UpdateName(id, value) => {
            with_record(component, &id, |r| r.name = value);
            persist_records(component);
            true
        }
        Msg::UpdateKind(id, value) => {
            with_record(component, &id, |r| r.kind = value);
            persist_records(component);
            true
        }
        Msg::UpdateDate(id, index, value) => {
            with_record(component, &id, |r| {
                if let Some(slot) = r.dates.get_mut(index) {
                    *slot = value;
                }
            });
            persist_records(component);
            true
        }
        Msg::AddDateSlot(id) => {
            with_record(component, &id, |r| r.dates.push(String::new()));
            persist_records(component);
            true
        }
        Msg::BeginHeaderEdit => {
            component.header_draft = Some(component.header.clone());
            true
        }
        Msg::EditHeaderField(field, value) => {
            if let Some(draft) = &mut component.header_draft {
                match field {
                    HeaderField::TopHeader => draft.top_header = value,
                    HeaderField::SubHeader => draft.sub_header = value,
                    HeaderField::MosqueName => draft.mosque_name = value,
                    HeaderField::HijriYear => draft.hijri_year = value,
                    HeaderField::MasehiYear => draft.masehi_year = value,
                }
            }
            true
        }
        Msg::CancelHeaderEdit => {
            component.header_draft = None;
            true
        }
        Msg::SaveHeader => {
            if let Some(draft) = component.header_draft.take() {
                component.header = draft;
                persist_header(component);
            }
            true
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(file) => {
            // Re-selecting the same file must fire again later.
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }

            if !component.records.is_empty()
                && !confirm("Mengunggah file baru akan menggantikan data yang ada. Lanjutkan?")
            {
                return false;
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                upload_spreadsheet(file, link).await;
            });
            false
        }
        Msg::ImportReady(records) => {
            let count = records.len();
            component.records = records;
            persist_records(component);
            show_toast(&format!("Berhasil mengimpor {} data donatur.", count));
            true
        }
        Msg::Print => {
            if component.has_invalid_dates()
                && !confirm("Ada format tanggal yang tidak valid (gunakan DD/MM/YYYY). Tetap cetak?")
            {
                return false;
            }
            if let Some(window) = web_sys::window() {
                let _ = window.print();
            }
            false
        }
    }
}

/// Apply a closure to the record with the given id, if it still exists.
fn with_record(
    component: &mut EditorComponent,
    id: &str,
    apply: impl FnOnce(&mut DonationRecord),
) {
    if let Some(record) = component.records.iter_mut().find(|r| r.id == id) {
        apply(record);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Persist the record list and refresh the unload guard.
fn persist_records(component: &EditorComponent) {
    set_window_dirty_flag(component);
    let records = component.records.clone();
    spawn_local(async move {
        match Request::post("/api/records/save").json(&records) {
            Ok(request) => match request.send().await {
                Ok(response) if response.status() == 200 => {}
                Ok(response) => {
                    error!(format!(
                        "record save rejected: {}",
                        response.text().await.unwrap_or_default()
                    ));
                    show_toast("Gagal menyimpan data donatur.");
                }
                Err(err) => {
                    error!(format!("record save failed: {}", err));
                    show_toast("Gagal menyimpan data donatur.");
                }
            },
            Err(err) => error!(format!("record save request could not be built: {}", err)),
        }
    });
}

fn persist_header(component: &EditorComponent) {
    let header = component.header.clone();
    spawn_local(async move {
        match Request::post("/api/header/save").json(&header) {
            Ok(request) => match request.send().await {
                Ok(response) if response.status() == 200 => {
                    show_toast("Pengaturan kepala surat tersimpan.");
                }
                Ok(response) => {
                    error!(format!(
                        "header save rejected: {}",
                        response.text().await.unwrap_or_default()
                    ));
                    show_toast("Gagal menyimpan kepala surat.");
                }
                Err(err) => {
                    error!(format!("header save failed: {}", err));
                    show_toast("Gagal menyimpan kepala surat.");
                }
            },
            Err(err) => error!(format!("header save request could not be built: {}", err)),
        }
    });
}

/// Send the chosen file to the import endpoint and hand the mapped records
/// back to the component. Stored state only changes when the whole file
/// parsed; any failure ends in a toast.
async fn upload_spreadsheet(file: web_sys::File, link: yew::html::Scope<EditorComponent>) {
    let Ok(form) = web_sys::FormData::new() else {
        show_toast("Gagal menyiapkan unggahan.");
        return;
    };
    let filename = file.name();
    if form
        .append_with_blob_and_filename("file", &file, &filename)
        .is_err()
    {
        show_toast("Gagal menyiapkan unggahan.");
        return;
    }

    match Request::post("/api/spreadsheet/import").body(form) {
        Ok(request) => match request.send().await {
            Ok(response) if response.status() == 200 => {
                match response.json::<Vec<DonationRecord>>().await {
                    Ok(records) => link.send_message(Msg::ImportReady(records)),
                    Err(err) => {
                        error!(format!("import reply unreadable: {}", err));
                        show_toast("Gagal membaca file Excel. Pastikan format file benar.");
                    }
                }
            }
            Ok(response) => {
                let detail = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Pastikan format file benar.".to_string());
                show_toast(&detail);
            }
            Err(err) => {
                error!(format!("import upload failed: {}", err));
                show_toast("Gagal mengunggah file.");
            }
        },
        Err(err) => {
            error!(format!("import request could not be built: {}", err));
            show_toast("Gagal mengunggah file.");
        }
    }
}

/// Sets the global `app_dirty` flag read by the `beforeunload` guard in
/// `index.html`: leaving the page warns while donor data is present.
fn set_window_dirty_flag(component: &EditorComponent) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(!component.records.is_empty()),
        );
    }
}

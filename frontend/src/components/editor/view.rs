//! View rendering for the donor record editor.
//!
//! The UI has two modes: the editor (header config card plus the record
//! table) and the print preview. The navigation bar switches between them
//! and carries the export/upload/print actions for the active mode.

use common::dates::is_valid_date;
use common::model::record::DonationRecord;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{HeaderField, Msg};
use super::state::EditorComponent;
use crate::components::print::PrintPreview;

/// Main view function: navigation, then the active mode's pane.
pub fn view(component: &EditorComponent, ctx: &Context<EditorComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="app-root">
            { build_nav(component, link) }
            <main class="content">
                {
                    if component.show_print {
                        build_print_section(component, link)
                    } else {
                        html! {
                            <>
                                { build_header_card(component, link) }
                                { build_table_card(component, link) }
                            </>
                        }
                    }
                }
            </main>
            <footer class="no-print app-footer">
                <p>{"Sistem Digitalisasi Masjid & Musholla"}</p>
            </footer>
        </div>
    }
}

fn build_nav(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    html! {
        <nav class="no-print top-nav">
            <div class="brand">
                <h1>{ if component.show_print { "PRATINJAU CETAK" } else { "EDITOR DATA TA'JIL" } }</h1>
                <p>{ if component.show_print { "Mode Landscape Aktif" } else { "Kelola Data Donatur" } }</p>
            </div>
            <div class="nav-actions">
                <button class="btn" onclick={link.callback(|_| Msg::TogglePrint)}>
                    { if component.show_print { "Buka Editor Data" } else { "Tampilkan Preview Cetak" } }
                </button>
                {
                    if component.show_print {
                        html! {
                            <button class="btn btn-accent" onclick={link.callback(|_| Msg::Print)}>
                                {"CETAK SEKARANG"}
                            </button>
                        }
                    } else {
                        html! {
                            <>
                                <a class="btn" href="/api/spreadsheet/export" title="Export ke Excel">{"Export Excel"}</a>
                                <a class="btn" href="/api/document/export" title="Export ke dokumen Word">{"Export Word"}</a>
                                <button class="btn btn-light" onclick={link.callback(|_| Msg::OpenFileDialog)}>
                                    {"Upload Excel"}
                                </button>
                                <input
                                    ref={component.file_input_ref.clone()}
                                    type="file"
                                    accept=".xlsx, .xls, .csv"
                                    style="display: none;"
                                    onchange={link.batch_callback(|e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        input.files().and_then(|files| files.get(0)).map(Msg::FileSelected)
                                    })}
                                />
                            </>
                        }
                    }
                }
            </div>
        </nav>
    }
}

fn build_header_card(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    let editing = component.header_draft.is_some();
    let shown = component.header_draft.as_ref().unwrap_or(&component.header);
    html! {
        <section class="card">
            <div class="card-title-row">
                <h2>{"Konfigurasi Kepala Surat"}</h2>
                {
                    if editing {
                        html! {
                            <div class="title-actions">
                                <button class="btn btn-primary" onclick={link.callback(|_| Msg::SaveHeader)}>
                                    {"Simpan Pengaturan"}
                                </button>
                                <button class="btn" onclick={link.callback(|_| Msg::CancelHeaderEdit)}>
                                    {"Batal"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {
                            <button class="btn" onclick={link.callback(|_| Msg::BeginHeaderEdit)}>
                                {"Ubah Teks Header"}
                            </button>
                        }
                    }
                }
            </div>
            <div class="header-grid">
                { header_input(link, "Judul Atas", HeaderField::TopHeader, &shown.top_header, editing) }
                { header_input(link, "Sub Judul", HeaderField::SubHeader, &shown.sub_header, editing) }
                { header_input(link, "Tahun Hijriyah", HeaderField::HijriYear, &shown.hijri_year, editing) }
                { header_input(link, "Tahun Masehi", HeaderField::MasehiYear, &shown.masehi_year, editing) }
                { header_input(link, "Nama Masjid", HeaderField::MosqueName, &shown.mosque_name, editing) }
            </div>
        </section>
    }
}

/// One labelled header field; disabled outside edit mode so the draft cycle
/// stays explicit.
fn header_input(
    link: &Scope<EditorComponent>,
    label: &str,
    field: HeaderField,
    value: &str,
    editing: bool,
) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <input
                disabled={!editing}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::EditHeaderField(field, input.value())
                })}
            />
        </label>
    }
}

fn build_table_card(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    let filtered = component.filtered();
    html! {
        <section class="card">
            <div class="table-toolbar">
                <input
                    class="search"
                    placeholder="Cari donatur..."
                    value={component.search_query.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetSearch(input.value())
                    })}
                />
                <div class="toolbar-actions">
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::AddRow)}>
                        {"TAMBAH BARIS"}
                    </button>
                    <a class="btn" href="/api/spreadsheet/template">{"Template"}</a>
                    <button class="btn btn-danger" onclick={link.callback(|_| Msg::ClearAll)}>
                        {"HAPUS SEMUA"}
                    </button>
                </div>
            </div>
            {
                if filtered.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p class="empty-title">{"Daftar donatur kosong."}</p>
                            <p>{"Klik \"TAMBAH BARIS\" atau \"Upload Excel\" untuk memulai."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <table class="editor-table">
                            <thead>
                                <tr>
                                    <th class="col-no">{"No"}</th>
                                    <th>{"Identitas Donatur"}</th>
                                    <th>{"Jadwal Tanggal"}</th>
                                    <th class="col-opt">{"Opsi"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for filtered.iter().map(|record| build_row(record, link)) }
                            </tbody>
                        </table>
                    }
                }
            }
        </section>
    }
}

fn build_row(record: &DonationRecord, link: &Scope<EditorComponent>) -> Html {
    let id = record.id.clone();
    let on_no = {
        let id = id.clone();
        link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateNo(id.clone(), input.value())
        })
    };
    let on_name = {
        let id = id.clone();
        link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateName(id.clone(), input.value())
        })
    };
    let on_kind = {
        let id = id.clone();
        link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateKind(id.clone(), input.value())
        })
    };
    let on_add_date = {
        let id = id.clone();
        link.callback(move |_| Msg::AddDateSlot(id.clone()))
    };
    let on_delete = {
        let id = id.clone();
        link.callback(move |_| Msg::DeleteRow(id.clone()))
    };

    html! {
        <tr key={record.id.clone()}>
            <td class="col-no">
                <input class="no-input" value={record.no.clone()} oninput={on_no} />
            </td>
            <td>
                <input class="name-input" value={record.name.clone()} oninput={on_name} />
                <input class="kind-input" value={record.kind.clone()} oninput={on_kind} />
            </td>
            <td>
                <div class="date-list">
                    {
                        for record.dates.iter().enumerate().map(|(index, date)| {
                            build_date_input(&id, index, date, link)
                        })
                    }
                    <button class="btn-small" title="Tambah tanggal" onclick={on_add_date}>
                        {"+"}
                    </button>
                </div>
            </td>
            <td class="col-opt">
                <button class="btn-small btn-danger" onclick={on_delete}>{"Hapus"}</button>
            </td>
        </tr>
    }
}

/// One date slot; invalid shapes get the failure styling but never block
/// editing.
fn build_date_input(
    id: &str,
    index: usize,
    date: &str,
    link: &Scope<EditorComponent>,
) -> Html {
    let class = if is_valid_date(date) {
        "date-input"
    } else {
        "date-input date-invalid"
    };
    let id = id.to_string();
    html! {
        <input
            class={class}
            value={date.to_string()}
            placeholder="DD/MM/YYYY"
            oninput={link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::UpdateDate(id.clone(), index, input.value())
            })}
        />
    }
}

fn build_print_section(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    html! {
        <div class="print-section">
            <div class="no-print print-tips">
                <p><b>{"Tips Pencetakan Landscape:"}</b></p>
                <p>{"Gunakan kertas A4, pastikan orientasi di setelan printer adalah Landscape. Atur margin ke \"None\"."}</p>
                <label class="per-page-picker">
                    {"Kartu per halaman: "}
                    <select onchange={link.batch_callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        select.value().parse::<usize>().ok().map(Msg::SetPerPage)
                    })}>
                        {
                            for [2usize, 3, 4, 6].iter().map(|k| html! {
                                <option value={k.to_string()} selected={component.per_page == *k}>
                                    { k.to_string() }
                                </option>
                            })
                        }
                    </select>
                </label>
            </div>
            <PrintPreview
                records={component.records.clone()}
                header={component.header.clone()}
                per_page={component.per_page}
            />
        </div>
    }
}

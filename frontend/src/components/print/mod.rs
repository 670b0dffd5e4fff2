//! Print preview: the record list as paginated handout cards.
//!
//! Pure-props component: pages are recomputed from the current records on
//! every render, each page padded to a fixed number of slots so the printed
//! grid stays visually complete.

mod page_grid;

use common::model::header::HeaderConfig;
use common::model::record::DonationRecord;
use common::paginate::{padded_page, paginate};
use page_grid::PageGrid;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PrintPreviewProps {
    pub records: Vec<DonationRecord>,
    pub header: HeaderConfig,
    #[prop_or(4)]
    pub per_page: usize,
}

pub struct PrintPreview;

impl Component for PrintPreview {
    type Message = ();
    type Properties = PrintPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PrintPreview
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let pages = paginate(&props.records, props.per_page);

        if pages.is_empty() {
            return html! {
                <div class="no-print print-empty">
                    <p>{"Data Kosong"}</p>
                </div>
            };
        }

        html! {
            <div class="print-container">
                {
                    for pages.iter().enumerate().map(|(page_index, page)| html! {
                        <PageGrid rows={props.per_page}>
                            {
                                for padded_page(page, props.per_page).into_iter().map(|slot| {
                                    match slot {
                                        Some(record) => card(record, page_index, &props.header),
                                        None => empty_slot(),
                                    }
                                })
                            }
                        </PageGrid>
                    })
                }
                <div class="no-print print-status">
                    <span class="status-label">{"PENGATURAN PRESISI AKTIF"}</span>
                    <span class="status-count">{ format!("{} LEMBAR", pages.len()) }</span>
                </div>
            </div>
        }
    }
}

/// One handout slip: mosque header, donor identity, the first two dates and
/// the donation kind.
fn card(record: &DonationRecord, page_index: usize, header: &HeaderConfig) -> Html {
    html! {
        <div class="print-item card-slip">
            <div class="slip-head">
                <p class="bismillah">{"بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيم"}</p>
                <h2 class="mosque-title">{ header.mosque_name.clone() }</h2>
                <p class="hijri">{ header.hijri_year.clone() }</p>
                <hr class="slip-rule" />
                <p class="top-header">{ header.top_header.clone() }</p>
                <h3 class="sub-header">{ header.sub_header.clone() }</h3>
            </div>
            <table class="slip-table">
                <thead>
                    <tr>
                        <th class="slip-no-col">{"No"}</th>
                        <th>{"Nama Lengkap Donatur"}</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td class="slip-no">{ record.no.clone() }</td>
                        <td class="slip-name">{ record.name.clone() }</td>
                    </tr>
                    <tr>
                        <td colspan="2" class="slip-caption">
                            {"Jadwal Tanggal Penyaluran & Sumbangan"}
                        </td>
                    </tr>
                    <tr>
                        <td colspan="2">
                            <div class="slip-dates">
                                { date_box("Tanggal Ke-1", record.dates.first()) }
                                { date_box("Tanggal Ke-2", record.dates.get(1)) }
                            </div>
                            <p class="slip-kind">{ format!("Bentuk: {}", record.kind) }</p>
                        </td>
                    </tr>
                </tbody>
            </table>
            <div class="slip-foot">
                <p>{"Dokumen Resmi Panitia Ramadhan Mubarak"}</p>
                <p>{ format!("Halaman {} \u{2022} {}", page_index + 1, header.masehi_year) }</p>
            </div>
        </div>
    }
}

fn date_box(label: &str, value: Option<&String>) -> Html {
    let shown = value
        .map(|d| d.as_str())
        .filter(|d| !d.is_empty())
        .unwrap_or("--/--/----");
    html! {
        <div class="date-box">
            <p class="date-box-label">{ label }</p>
            <div class="date-box-value">{ shown.to_string() }</div>
        </div>
    }
}

/// Placeholder for a missing record so the page grid keeps its shape.
fn empty_slot() -> Html {
    html! {
        <div class="print-item empty-slot">
            <span>{"Slot Kosong"}</span>
        </div>
    }
}

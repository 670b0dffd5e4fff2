//! Donor record editor: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering
//! and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `HeaderField`, `EditorComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, load the persisted record list and header config from
//!   the backend; failures keep the built-in state and surface as toasts
//!   (user-facing text is Indonesian by design).

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

use helpers::show_toast;
pub use messages::{HeaderField, Msg};
pub use state::EditorComponent;

use common::model::header::HeaderConfig;
use common::model::record::DonationRecord;

impl Component for EditorComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        EditorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            load_state(ctx.link().clone());
        }
    }
}

/// Fetch both state blobs; each arrives through its own message so a slow
/// header does not hold the record table back.
fn load_state(link: yew::html::Scope<EditorComponent>) {
    let records_link = link.clone();
    spawn_local(async move {
        match Request::get("/api/records").send().await {
            Ok(resp) if resp.status() == 200 => {
                match resp.json::<Vec<DonationRecord>>().await {
                    Ok(records) => records_link.send_message(Msg::RecordsLoaded(records)),
                    Err(_) => show_toast("Data donatur tersimpan tidak terbaca."),
                }
            }
            _ => show_toast("Gagal memuat data donatur dari server."),
        }
    });

    spawn_local(async move {
        match Request::get("/api/header").send().await {
            Ok(resp) if resp.status() == 200 => {
                if let Ok(header) = resp.json::<HeaderConfig>().await {
                    link.send_message(Msg::HeaderLoaded(header));
                }
            }
            _ => show_toast("Gagal memuat kepala surat dari server."),
        }
    });
}

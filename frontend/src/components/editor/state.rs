//! Component state for the donor record editor.

use common::dates::is_valid_date;
use common::model::header::HeaderConfig;
use common::model::record::DonationRecord;
use yew::prelude::*;

/// Main state container for the `EditorComponent`.
///
/// Holds the record list and header config (the two persisted blobs), the
/// header draft for the edit-buffer cycle, and the transient UI state of
/// the editor and print preview.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct EditorComponent {
    /// Current donor records, in display order.
    pub records: Vec<DonationRecord>,

    /// Canonical header config. Only overwritten on an explicit save.
    pub header: HeaderConfig,

    /// Draft copy of the header while editing; `None` outside edit mode.
    /// Discarded on cancel, promoted to `header` on save.
    pub header_draft: Option<HeaderConfig>,

    /// Live search text; filtering is recomputed per render and never
    /// mutates `records`.
    pub search_query: String,

    /// `true` while the print preview is shown instead of the editor.
    pub show_print: bool,

    /// Cards per printed page.
    pub per_page: usize,

    /// Reference to the hidden file input used for spreadsheet upload.
    pub file_input_ref: NodeRef,

    /// Guard so the first-render state load runs only once.
    pub loaded: bool,
}

impl EditorComponent {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            header: HeaderConfig::default(),
            header_draft: None,
            search_query: String::new(),
            show_print: false,
            per_page: 4,
            file_input_ref: Default::default(),
            loaded: false,
        }
    }

    /// Records matching the current search, in list order.
    pub fn filtered(&self) -> Vec<&DonationRecord> {
        self.records
            .iter()
            .filter(|r| r.matches(&self.search_query))
            .collect()
    }

    /// Whether any date field would print with a bad format.
    pub fn has_invalid_dates(&self) -> bool {
        self.records
            .iter()
            .any(|r| r.dates.iter().any(|d| !is_valid_date(d)))
    }
}

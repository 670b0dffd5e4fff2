use common::model::header::HeaderConfig;
use common::model::record::DonationRecord;

/// One editable field of the header config draft.
#[derive(Clone, Copy, PartialEq)]
pub enum HeaderField {
    TopHeader,
    SubHeader,
    MosqueName,
    HijriYear,
    MasehiYear,
}

pub enum Msg {
    RecordsLoaded(Vec<DonationRecord>),
    HeaderLoaded(HeaderConfig),
    TogglePrint,
    SetSearch(String),
    SetPerPage(usize),
    AddRow,
    DeleteRow(String),
    ClearAll,
    UpdateNo(String, String),
    UpdateName(String, String),
    UpdateKind(String, String),
    UpdateDate(String, usize, String),
    AddDateSlot(String),
    BeginHeaderEdit,
    EditHeaderField(HeaderField, String),
    CancelHeaderEdit,
    SaveHeader,
    OpenFileDialog,
    FileSelected(web_sys::File),
    ImportReady(Vec<DonationRecord>),
    Print,
}

//! Shared model and core logic for the ta'jil schedule editor.
//!
//! Everything in this crate compiles for both the native backend and the
//! wasm frontend: the record/header model, date normalization and
//! validation, print pagination and the spreadsheet row mapping.

pub mod dates;
pub mod model;
pub mod paginate;
pub mod rows;

//! # Record List Service
//!
//! HTTP endpoints for the donor record list, the primary state blob of the
//! editor. The list is treated as one unit: reads return the whole list and
//! saves replace it, mirroring how the editor keeps its state in memory and
//! persists after every change.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/records`**:
//!     - **Handler**: `get::process`
//!     - **Description**: Returns the persisted record list as JSON. When no
//!       blob exists yet (first start) or the blob is malformed, the built-in
//!       example data is returned instead.
//!
//! *   **`POST /api/records/save`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Replaces the persisted record list with the JSON
//!       payload. No field validation happens here; date problems are a
//!       display concern handled by the editor's validator styling.

mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/records";

/// Configures and returns the Actix `Scope` for the record list routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("/save", post().to(save::process))
}

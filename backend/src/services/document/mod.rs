mod export;

use actix_web::web;

const API_PATH: &str = "/api/document";

/// Configures and returns the Actix `Scope` for the document export route.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH).route("/export", web::get().to(export::process))
}

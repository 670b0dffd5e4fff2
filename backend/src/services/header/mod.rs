mod get;
mod save;

use actix_web::web;

const API_PATH: &str = "/api/header";

/// Configures and returns the Actix `Scope` for the header config routes.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH)
        .route("", web::get().to(get::process))
        .route("/save", web::post().to(save::process))
}

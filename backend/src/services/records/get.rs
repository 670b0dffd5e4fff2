use crate::store;
use actix_web::Responder;

/// Handler for `GET /api/records`.
///
/// Always succeeds: missing or unreadable state resolves to the built-in
/// example data inside the store.
pub async fn process() -> impl Responder {
    actix_web::HttpResponse::Ok().json(store::load_records())
}

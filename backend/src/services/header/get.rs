use crate::store;
use actix_web::Responder;

/// Handler for `GET /api/header`: the persisted header config, or the
/// defaults when nothing was saved yet.
pub async fn process() -> impl Responder {
    actix_web::HttpResponse::Ok().json(store::load_header())
}

use crate::store;
use actix_web::{web, Responder};
use common::model::header::HeaderConfig;

pub async fn process(payload: web::Json<HeaderConfig>) -> impl Responder {
    match store::save_header(&payload) {
        Ok(_) => actix_web::HttpResponse::Ok().body("Kepala surat tersimpan"),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Gagal menyimpan kepala surat: {}", e)),
    }
}

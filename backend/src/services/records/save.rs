use crate::store;
use actix_web::{web, Responder};
use common::model::record::DonationRecord;

pub async fn process(payload: web::Json<Vec<DonationRecord>>) -> impl Responder {
    match store::save_records(&payload) {
        Ok(_) => actix_web::HttpResponse::Ok().body("Data donatur tersimpan"),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Gagal menyimpan data donatur: {}", e)),
    }
}

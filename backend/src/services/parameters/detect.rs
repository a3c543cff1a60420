use actix_web::{web, HttpResponse, Responder};
use common::params::scanner;
use common::requests::{DetectRequest, DetectResponse};

/// `POST /api/parameters/detect`: unique placeholder names across `fields`,
/// in first-seen order.
pub(crate) async fn process(payload: web::Json<DetectRequest>) -> impl Responder {
    let fields: Vec<&str> = payload.fields.iter().map(String::as_str).collect();
    HttpResponse::Ok().json(DetectResponse {
        names: scanner::extract_from_fields(&fields),
    })
}

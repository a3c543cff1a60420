use actix_web::{web, HttpResponse, Responder};
use common::params::segmenter;
use common::requests::{SegmentRequest, SegmentResponse};

/// `POST /api/parameters/segment`: the text split into literal and
/// placeholder segments, for renderers that highlight placeholders.
pub(crate) async fn process(payload: web::Json<SegmentRequest>) -> impl Responder {
    HttpResponse::Ok().json(SegmentResponse {
        segments: segmenter::segment(&payload.text),
    })
}

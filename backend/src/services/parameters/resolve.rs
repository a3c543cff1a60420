use actix_web::{web, HttpResponse, Responder};
use common::params::substitution;
use common::requests::{ResolveRequest, ResolveResponse};

/// `POST /api/parameters/resolve`: the text with every mapped placeholder
/// replaced. Unmapped placeholders stay as `$name`.
pub(crate) async fn process(payload: web::Json<ResolveRequest>) -> impl Responder {
    HttpResponse::Ok().json(ResolveResponse {
        text: substitution::resolve(&payload.text, &payload.values),
    })
}

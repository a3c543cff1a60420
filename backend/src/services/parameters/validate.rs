use actix_web::{web, HttpResponse, Responder};
use common::params::validator;
use common::requests::{ValidateRequest, ValidateResponse};

/// `POST /api/parameters/validate`: whether `value` fits the parameter's
/// declared type. A mismatch is a normal answer (`valid: false` with the
/// reason), not an HTTP error.
pub(crate) async fn process(payload: web::Json<ValidateRequest>) -> impl Responder {
    let response = match validator::check(&payload.parameter, &payload.value) {
        Ok(()) => ValidateResponse {
            valid: true,
            error: None,
        },
        Err(e) => ValidateResponse {
            valid: false,
            error: Some(e.to_string()),
        },
    };
    HttpResponse::Ok().json(response)
}

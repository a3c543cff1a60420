//! Catalog text conversion endpoints.
//!
//! Parsing never fails: text the codec cannot read comes back as an empty
//! parameter list with status 200, the same as an empty catalog. The editor
//! keeps the text the user typed either way.

use actix_web::{web, HttpResponse, Responder};
use common::params::codec;
use common::requests::{
    FormatCatalogRequest, FormatCatalogResponse, ParseCatalogRequest, ParseCatalogResponse,
};

/// `POST /api/parameters/catalog/parse`
pub(crate) async fn parse(payload: web::Json<ParseCatalogRequest>) -> impl Responder {
    HttpResponse::Ok().json(ParseCatalogResponse {
        parameters: codec::deserialize(&payload.json),
    })
}

/// `POST /api/parameters/catalog/format`
pub(crate) async fn format(payload: web::Json<FormatCatalogRequest>) -> impl Responder {
    HttpResponse::Ok().json(FormatCatalogResponse {
        json: codec::serialize(&payload.parameters),
    })
}

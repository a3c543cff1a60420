use actix_web::{web, HttpResponse, Responder};
use common::params::render;
use common::requests::{RenderRequest, RenderResponse};
use log::debug;

/// `POST /api/parameters/render`
///
/// Without `rows`, renders one instance with `values`. With `rows`, renders
/// one instance per row and ignores `values`.
pub(crate) async fn process(payload: web::Json<RenderRequest>) -> impl Responder {
    let req = payload.into_inner();
    let instances = match &req.rows {
        Some(rows) => render::render_rows(&req.content, rows),
        None => vec![render::render(&req.content, &req.values)],
    };
    debug!("Rendered {} test instances", instances.len());
    HttpResponse::Ok().json(RenderResponse { instances })
}

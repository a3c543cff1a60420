use actix_web::{web, HttpResponse, Responder};
use common::params::reconciler;
use common::requests::{ReconcileRequest, ReconcileResponse};
use log::debug;

/// `POST /api/parameters/reconcile`
///
/// Stateless form of the editor reconciler: the caller sends what its fields
/// and catalog text area currently hold, and gets back the detected names for
/// its badges plus the catalog text to show. The returned catalog equals the
/// sent one unless it was empty (seeded) or missing newly detected names
/// (appended).
pub(crate) async fn process(payload: web::Json<ReconcileRequest>) -> impl Responder {
    let req = payload.into_inner();
    let outcome = reconciler::reconcile(
        &req.catalog,
        &[req.steps.as_str(), req.expected_result.as_str()],
    );
    debug!(
        "Reconciled {} detected parameters (catalog changed: {})",
        outcome.detected.len(),
        outcome.catalog != req.catalog
    );
    HttpResponse::Ok().json(ReconcileResponse {
        detected: outcome.detected,
        catalog: outcome.catalog,
    })
}

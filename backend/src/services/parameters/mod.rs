//! # Parameter Service Module
//!
//! Exposes the parameterized test-content engine from `common::params` over
//! HTTP, so editors and renderers that do not link the crate share the exact
//! same placeholder rules. Every endpoint is a pure function of its request
//! body: nothing is stored between calls and nothing is persisted.
//!
//! ## Sub-modules:
//! - `detect`: placeholder names found in a list of texts.
//! - `segment`: text split into literal and placeholder segments.
//! - `catalog`: catalog JSON parsing and formatting.
//! - `validate`: a value checked against a parameter's type.
//! - `resolve`: placeholder substitution in a single text.
//! - `reconcile`: detected names merged into the catalog text.
//! - `render`: full test instances from test content and values.

mod catalog;
mod detect;
mod reconcile;
mod render;
mod resolve;
mod segment;
mod validate;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for all parameter engine endpoints.
const API_PATH: &str = "/api/parameters";

/// Configures and returns the Actix `Scope` for the parameter engine routes.
///
/// All routes take and return JSON. A body that is not valid JSON for the
/// route is rejected by Actix with `400 Bad Request`; anything that parses is
/// answered with `200 OK`, since the engine itself has no failure cases.
///
/// # Registered Routes:
///
/// *   **`POST /detect`**: `{fields}` → `{names}`
/// *   **`POST /segment`**: `{text}` → `{segments}`
/// *   **`POST /catalog/parse`**: `{json}` → `{parameters}`
/// *   **`POST /catalog/format`**: `{parameters}` → `{json}`
/// *   **`POST /validate`**: `{parameter, value}` → `{valid, error?}`
/// *   **`POST /resolve`**: `{text, values}` → `{text}`
/// *   **`POST /reconcile`**: `{steps, expectedResult, catalog}` → `{detected, catalog}`
/// *   **`POST /render`**: `{content, values?, rows?}` → `{instances}`
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/detect", post().to(detect::process))
        .route("/segment", post().to(segment::process))
        .route("/catalog/parse", post().to(catalog::parse))
        .route("/catalog/format", post().to(catalog::format))
        .route("/validate", post().to(validate::process))
        .route("/resolve", post().to(resolve::process))
        .route("/reconcile", post().to(reconcile::process))
        .route("/render", post().to(render::process))
}

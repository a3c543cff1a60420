//! The parameterized test-content engine.
//!
//! Test steps and expected results may contain `$name` placeholders. This
//! module finds them (`scanner`, `segmenter`), keeps the catalog that declares
//! them in step with the text (`reconciler`), reads and writes that catalog
//! as JSON (`codec`), checks values against declared types (`validator`) and
//! puts values back into the text (`substitution`, `render`).
//!
//! All placeholder matching goes through `grammar`, so every operation agrees
//! on what a placeholder is.

pub mod codec;
pub mod grammar;
pub mod reconciler;
pub mod render;
pub mod scanner;
pub mod segmenter;
pub mod substitution;
pub mod validator;

pub use codec::{deserialize, serialize};
pub use reconciler::{reconcile, ReconcilerState};
pub use render::{render, render_rows};
pub use scanner::{extract_from_fields, extract_parameter_names};
pub use segmenter::segment;
pub use substitution::resolve;
pub use validator::is_valid;

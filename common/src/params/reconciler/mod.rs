//! Keeps a parameter catalog in step with the placeholders typed into a test.
//!
//! Every editor that lets a user write `$name` placeholders (manual test-case
//! authoring, data-driven test-data editing) drives this one module instead of
//! carrying its own copy of the detect-and-seed logic.
//!
//! Structure, Elm style:
//! - `state`: `ReconcilerState`, owned by the editor, plus `WatchedField`.
//! - `messages`: `Msg`, one per user action the reconciler reacts to.
//! - `update`: the single `update` function that applies a `Msg`.
//!
//! The pure functions below do the actual work and are usable on their own by
//! stateless callers.
//!
//! Catalog policy
//! - Names already in the catalog are left untouched, so hand-entered
//!   descriptions, types and defaults survive every text change.
//! - Newly detected names are appended with `Parameter::detected`.
//! - Nothing is ever removed because a placeholder disappeared from the text.
//!   A user deleting and retyping `$site` must not lose its metadata. Removal
//!   is only `Msg::RemoveParameter`.
//! - Catalog text that is non-empty but unreadable (the user is mid-edit) is
//!   never replaced.
//! - Merging works on the raw JSON entries, so keys and entries the
//!   parameter model cannot read are written back as they were.

mod messages;
mod state;
mod update;

pub use messages::Msg;
pub use state::{ReconcilerState, WatchedField};
pub use update::update;

use super::{codec, scanner};
use crate::model::parameter::Parameter;
use log::{debug, warn};

/// Result of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Names found across the watched fields, first-seen order.
    pub detected: Vec<String>,
    /// Catalog text after seeding or merging. Identical to the input text
    /// when nothing had to change.
    pub catalog: String,
}

/// Appends a `Parameter::detected` entry for every detected name the
/// catalog does not declare yet. Existing entries keep their position and
/// content; entries whose names are no longer detected are kept too.
pub fn merge_detected(catalog: &[Parameter], detected: &[String]) -> Vec<Parameter> {
    let mut merged = catalog.to_vec();
    for name in detected {
        if !merged.iter().any(|p| &p.name == name) {
            merged.push(Parameter::detected(name));
        }
    }
    merged
}

/// Scans `fields` in order and brings `catalog_text` up to date.
///
/// - blank or empty-array text is seeded from the detected names
/// - text that is not a JSON array or object is a catalog being hand-edited,
///   and is returned unchanged
/// - otherwise missing names are appended after the existing entries; the
///   text is only re-formatted when at least one entry was added
///
/// Calling it again with the returned catalog and the same fields returns
/// the same catalog.
pub fn reconcile(catalog_text: &str, fields: &[&str]) -> Reconciliation {
    let detected = scanner::extract_from_fields(fields);
    let catalog = next_catalog_text(catalog_text, &detected);
    Reconciliation { detected, catalog }
}

fn next_catalog_text(catalog_text: &str, detected: &[String]) -> String {
    if detected.is_empty() {
        return catalog_text.to_string();
    }

    if codec::is_empty_text(catalog_text) {
        debug!("Seeding parameter catalog with {} detected names", detected.len());
        return codec::serialize(&merge_detected(&[], detected));
    }

    let Some(mut entries) = codec::raw_entries(catalog_text) else {
        debug!("Parameter catalog is unreadable; leaving it as typed");
        return catalog_text.to_string();
    };

    let before = entries.len();
    for name in detected {
        if entries.iter().any(|e| codec::entry_name(e) == Some(name.as_str())) {
            continue;
        }
        match serde_json::to_value(Parameter::detected(name)) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Could not add parameter '{}' to the catalog: {}", name, e),
        }
    }

    if entries.len() == before {
        catalog_text.to_string()
    } else {
        debug!(
            "Appending {} detected parameters to the catalog",
            entries.len() - before
        );
        codec::write_entries(&entries)
    }
}

//! Reconciler state owned by an editor session.

/// A text field whose placeholders feed the catalog.
///
/// The declaration order is the scan order: steps before expected result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WatchedField {
    Steps,
    ExpectedResult,
}

/// Everything the reconciler knows about one editor.
///
/// The editor keeps this value, sends it `Msg`s through `update`, and reads
/// `detected()` for the badge list and `catalog()` for the catalog text area.
/// Nothing here is global; two editors hold two states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilerState {
    /// Watched fields with their current text, in scan order.
    pub(super) fields: Vec<(WatchedField, String)>,
    /// Names detected by the last reconciliation.
    pub(super) detected: Vec<String>,
    /// Serialized catalog as shown in the catalog editor.
    pub(super) catalog: String,
}

impl ReconcilerState {
    /// State for an editor watching `fields`, starting from a stored catalog.
    ///
    /// Fields are always scanned in `WatchedField` order, whatever order they
    /// are listed in here. Duplicates are ignored.
    pub fn new(fields: &[WatchedField], catalog: impl Into<String>) -> Self {
        let mut watched = fields.to_vec();
        watched.sort();
        watched.dedup();
        Self {
            fields: watched.into_iter().map(|f| (f, String::new())).collect(),
            detected: Vec::new(),
            catalog: catalog.into(),
        }
    }

    /// State for a test-case editor: steps and expected result.
    pub fn for_test_case(catalog: impl Into<String>) -> Self {
        Self::new(&[WatchedField::Steps, WatchedField::ExpectedResult], catalog)
    }

    pub fn detected(&self) -> &[String] {
        &self.detected
    }

    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    pub fn field_text(&self, field: WatchedField) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, text)| text.as_str())
    }

    pub fn watches(&self, field: WatchedField) -> bool {
        self.fields.iter().any(|(f, _)| *f == field)
    }

    pub(super) fn field_texts(&self) -> Vec<&str> {
        self.fields.iter().map(|(_, text)| text.as_str()).collect()
    }
}

use super::state::WatchedField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A watched field now holds `text`, possibly mid-keystroke.
    FieldChanged { field: WatchedField, text: String },
    /// The user typed directly into the catalog text area.
    CatalogEdited(String),
    /// The user deleted a parameter from the catalog editor.
    RemoveParameter(String),
}

//! Applies reconciler messages to a `ReconcilerState`.

use super::messages::Msg;
use super::reconcile;
use super::state::ReconcilerState;
use crate::params::codec;
use log::debug;

/// Applies `msg` to `state`.
///
/// Returns `true` when the detected list or the catalog text changed, so the
/// editor knows whether to re-render. Re-sending the text a field already
/// holds is a no-op that returns `false`, which keeps editors that echo their
/// own updates from looping.
pub fn update(state: &mut ReconcilerState, msg: Msg) -> bool {
    match msg {
        Msg::FieldChanged { field, text } => {
            let Some(slot) = state.fields.iter_mut().find(|(f, _)| *f == field) else {
                debug!("Ignoring change to unwatched field {:?}", field);
                return false;
            };
            if slot.1 == text {
                return false;
            }
            slot.1 = text;

            let outcome = reconcile(&state.catalog, &state.field_texts());
            let changed = outcome.detected != state.detected || outcome.catalog != state.catalog;
            state.detected = outcome.detected;
            state.catalog = outcome.catalog;
            changed
        }
        Msg::CatalogEdited(text) => {
            if state.catalog == text {
                return false;
            }
            state.catalog = text;
            true
        }
        Msg::RemoveParameter(name) => {
            let Some(mut entries) = codec::raw_entries(&state.catalog) else {
                return false;
            };
            let before = entries.len();
            entries.retain(|e| codec::entry_name(e) != Some(name.as_str()));
            if entries.len() == before {
                return false;
            }
            debug!("Removed parameter '{}' from the catalog", name);
            state.catalog = codec::write_entries(&entries);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parameter::{Parameter, ParameterType};
    use crate::params::reconciler::WatchedField;
    use serde_json::json;

    fn steps(text: &str) -> Msg {
        Msg::FieldChanged {
            field: WatchedField::Steps,
            text: text.to_string(),
        }
    }

    fn expected(text: &str) -> Msg {
        Msg::FieldChanged {
            field: WatchedField::ExpectedResult,
            text: text.to_string(),
        }
    }

    fn catalog_names(state: &ReconcilerState) -> Vec<String> {
        codec::deserialize(state.catalog())
            .into_iter()
            .map(|p| p.name)
            .collect()
    }

    #[test]
    fn typing_seeds_the_default_catalog() {
        let mut state = ReconcilerState::for_test_case("[]");
        assert!(update(&mut state, steps("Open $site")));
        assert_eq!(state.detected(), ["site"]);
        assert_eq!(catalog_names(&state), vec!["site"]);
    }

    #[test]
    fn steps_come_before_expected_result() {
        let mut state = ReconcilerState::new(
            &[WatchedField::ExpectedResult, WatchedField::Steps],
            "",
        );
        update(&mut state, expected("$title is shown"));
        update(&mut state, steps("Open $site"));
        assert_eq!(state.detected(), ["site", "title"]);
    }

    #[test]
    fn same_text_twice_changes_nothing() {
        let mut state = ReconcilerState::for_test_case("");
        assert!(update(&mut state, steps("Open $site as $user")));
        let snapshot = state.clone();
        assert!(!update(&mut state, steps("Open $site as $user")));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn retyping_a_placeholder_keeps_its_metadata() {
        let custom = Parameter {
            name: "site".to_string(),
            param_type: ParameterType::Url,
            description: Some("custom".to_string()),
            default_value: Some(json!("https://x.com")),
            ..Default::default()
        };
        let mut state = ReconcilerState::for_test_case(codec::serialize(&[custom.clone()]));
        update(&mut state, steps("Open $site"));
        update(&mut state, steps("Open $sit"));
        update(&mut state, steps("Open $site"));

        let catalog = codec::deserialize(state.catalog());
        assert_eq!(catalog[0], custom);
        assert!(catalog.iter().any(|p| p.name == "sit"));
        assert_eq!(state.detected(), ["site"]);
    }

    #[test]
    fn unwatched_field_is_ignored() {
        let mut state = ReconcilerState::new(&[WatchedField::Steps], "");
        assert!(!update(&mut state, expected("$ignored")));
        assert!(state.detected().is_empty());
        assert_eq!(state.field_text(WatchedField::ExpectedResult), None);
    }

    #[test]
    fn catalog_edits_are_stored_as_typed() {
        let mut state = ReconcilerState::for_test_case("");
        assert!(update(&mut state, Msg::CatalogEdited("[{\"name\":".to_string())));
        assert!(update(&mut state, steps("Open $site")));
        assert_eq!(state.catalog(), "[{\"name\":");
        assert_eq!(state.detected(), ["site"]);
    }

    #[test]
    fn only_explicit_removal_deletes_entries() {
        let mut state = ReconcilerState::for_test_case("");
        update(&mut state, steps("Open $site as $user"));
        update(&mut state, steps("Open the home page"));
        assert_eq!(catalog_names(&state), vec!["site", "user"]);

        assert!(update(&mut state, Msg::RemoveParameter("user".to_string())));
        assert_eq!(catalog_names(&state), vec!["site"]);
        assert!(!update(&mut state, Msg::RemoveParameter("user".to_string())));
    }

    #[test]
    fn removal_leaves_other_entries_as_written() {
        let text = r#"[{"name":"site","note":"keep me"},{"name":"user"},{"label":"orphan"},{"name":"pw","type":5}]"#;
        let mut state = ReconcilerState::for_test_case(text);
        assert!(update(&mut state, Msg::RemoveParameter("user".to_string())));

        let entries = codec::raw_entries(state.catalog()).unwrap();
        assert_eq!(
            entries,
            vec![
                json!({"name":"site","note":"keep me"}),
                json!({"label":"orphan"}),
                json!({"name":"pw","type":5}),
            ]
        );
    }
}

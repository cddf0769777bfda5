use std::sync::Arc;

use chrono::{TimeZone, Utc};
use handoff_core::{DismissalScope, EngineConfig, HandoffError, Patient, SelectionKey, SuggestionKey};
use handoff_engine::{FixedClock, HandoffSession, KnowledgeBase, RelationshipGraph, ToggleAction};

fn builtin_session(hour: u32) -> HandoffSession {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 2, hour, 15, 0).unwrap());
    let mut session = HandoffSession::with_parts(
        KnowledgeBase::builtin(),
        EngineConfig::default(),
        Arc::new(clock),
    );
    session.add_patient(Patient::new("p-1", "Bệnh nhân A")).unwrap();
    session
}

fn graph_session(edges: &[(&str, &str, f64)], config: EngineConfig) -> HandoffSession {
    let graph = RelationshipGraph::from_entries(edges.iter().map(|(from, to, score)| {
        (from.to_string(), vec![(to.to_string(), *score)])
    }));
    let knowledge = Arc::new(KnowledgeBase {
        graph,
        ..KnowledgeBase::empty()
    });
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap());
    let mut session = HandoffSession::with_parts(knowledge, config, Arc::new(clock));
    session.add_patient(Patient::new("p-1", "Bệnh nhân A")).unwrap();
    session
}

#[test]
fn chest_pain_pulls_in_the_cardiac_work_up() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("assessment", "cardiac", "Chest Pain", None)
        .unwrap();

    let suggestions = session.suggestions().unwrap();
    for (item, score) in [
        ("EKG", 0.95),
        ("Troponin", 0.9),
        ("Aspirin", 0.8),
        ("Nitroglycerin", 0.8),
    ] {
        let record = &suggestions[item];
        assert_eq!(record.score, score, "score for {item}");
        assert_eq!(record.source, "Chest Pain");
        assert_eq!(record.key, SuggestionKey::for_pair("Chest Pain", item));
    }
    assert!(!suggestions.contains_key("Chest Pain"));
    assert!(!suggestions.contains_key("Anxiety"));
}

#[test]
fn removing_the_source_removes_its_suggestions() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("assessment", "cardiac", "Chest Pain", None)
        .unwrap();
    session
        .toggle_selection("assessment", "cardiac", "Chest Pain", None)
        .unwrap();
    assert!(session.suggestions().unwrap().is_empty());
}

#[test]
fn active_suggestions_are_ordered_by_score() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("assessment", "cardiac", "Chest Pain", None)
        .unwrap();

    let active = session.active_suggestions().unwrap();
    assert_eq!(active[0].item, "EKG");
    assert!(active
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn dismissed_key_reappears_under_a_new_source() {
    let mut session = graph_session(
        &[("Alpha", "Xray", 0.7), ("Beta", "Xray", 0.9)],
        EngineConfig::default(),
    );
    session
        .toggle_selection("assessment", "general", "Alpha", None)
        .unwrap();
    assert!(session.dismiss_suggestion("Alpha->Xray").unwrap());
    assert!(!session.dismiss_suggestion("Alpha->Xray").unwrap());
    assert!(session.active_suggestions().unwrap().is_empty());
    // Dismissal never touches the derived map.
    assert!(session.suggestions().unwrap().contains_key("Xray"));

    session
        .toggle_selection("assessment", "general", "Beta", None)
        .unwrap();
    let active = session.active_suggestions().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].key, SuggestionKey::for_pair("Beta", "Xray"));
}

#[test]
fn item_name_scope_keeps_the_item_hidden() {
    let config = EngineConfig {
        dismissal_scope: DismissalScope::ItemName,
        ..EngineConfig::default()
    };
    let mut session = graph_session(&[("Alpha", "Xray", 0.7), ("Beta", "Xray", 0.9)], config);
    session
        .toggle_selection("assessment", "general", "Alpha", None)
        .unwrap();
    session.dismiss_suggestion("Alpha->Xray").unwrap();
    session
        .toggle_selection("assessment", "general", "Beta", None)
        .unwrap();
    assert!(session.active_suggestions().unwrap().is_empty());
}

#[test]
fn clearing_resets_the_dismissed_set() {
    let mut session = graph_session(&[("Alpha", "Xray", 0.7)], EngineConfig::default());
    session
        .toggle_selection("assessment", "general", "Alpha", None)
        .unwrap();
    session.dismiss_suggestion("Alpha->Xray").unwrap();

    session.clear_all_selections().unwrap();
    assert!(session.dismissed().unwrap().is_empty());
    assert!(session.suggestions().unwrap().is_empty());
    assert!(session.active_patient().unwrap().timeline.is_empty());
}

#[test]
fn allergy_is_recorded_once() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("history", "history", "Allergies:PCN", None)
        .unwrap();
    let updated = session
        .toggle_selection("history", "history", "Allergies:PCN", Some("rash"))
        .unwrap();
    assert_eq!(updated.action, ToggleAction::Updated);
    assert_eq!(session.active_patient().unwrap().allergies, vec!["PCN".to_string()]);

    session
        .toggle_selection("history", "history", "Allergies:PCN", None)
        .unwrap();
    assert!(session.active_patient().unwrap().allergies.is_empty());
}

#[test]
fn abnormal_vital_adds_escalation_suggestions() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("vitals", "vitals", "SpO2", Some("84"))
        .unwrap();

    let context = session.clinical_context().unwrap();
    assert!(context.has_abnormal_values);
    assert_eq!(context.abnormal_fields, vec!["SpO2".to_string()]);
    let suggestions = session.suggestions().unwrap();
    assert!(suggestions.contains_key("Notify MD"));
    assert!(suggestions.contains_key("Repeat Vitals"));
}

#[test]
fn sedation_at_night_suggests_fall_precautions() {
    let mut session = builtin_session(2);
    session
        .toggle_selection("medications", "medications", "Lorazepam", None)
        .unwrap();
    assert!(session.suggestions().unwrap().contains_key("Fall Precautions"));
}

#[test]
fn accepting_a_suggestion_selects_the_catalog_entry() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("assessment", "cardiac", "Chest Pain", None)
        .unwrap();

    let outcome = session.accept_suggestion("EKG").unwrap();
    assert_eq!(outcome.action, ToggleAction::Added);
    assert_eq!(outcome.key, SelectionKey::new("interventions", "diagnostics", "EKG"));
    assert!(!session.suggestions().unwrap().contains_key("EKG"));

    let again = session.accept_suggestion("ekg").unwrap();
    assert_eq!(again.action, ToggleAction::Unchanged);
    assert_eq!(session.selections().unwrap().len(), 2);

    assert_eq!(
        session.accept_suggestion("Unicorn Therapy"),
        Err(HandoffError::UnresolvedItem("Unicorn Therapy".to_string()))
    );
}

#[test]
fn accepting_an_item_selected_under_another_key_is_unchanged() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("assessment", "general", "Fever", None)
        .unwrap();

    let outcome = session.accept_suggestion("Fever").unwrap();
    assert_eq!(outcome.action, ToggleAction::Unchanged);
    assert_eq!(outcome.key, SelectionKey::new("assessment", "general", "Fever"));
    assert_eq!(outcome.cascades_scheduled, 0);
    assert_eq!(session.selections().unwrap().len(), 1);
    assert_eq!(session.handoff_summary().unwrap().assessment.len(), 1);
}

#[test]
fn accepted_fever_lands_on_the_key_a_temperature_cascade_uses() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("vitals", "vitals", "Temp", Some("39.8"))
        .unwrap();
    session.apply_pending_cascades();
    let fever = SelectionKey::new("assessment", "general", "Fever");
    assert!(session.selections().unwrap().contains(&fever));

    let outcome = session.accept_suggestion("Fever").unwrap();
    assert_eq!(outcome.action, ToggleAction::Unchanged);
    assert_eq!(outcome.key, fever);
    let fevers = session
        .selections()
        .unwrap()
        .iter()
        .filter(|record| record.item == "Fever")
        .count();
    assert_eq!(fevers, 1);
}

#[test]
fn allergy_selected_under_two_keys_is_listed_once() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("history", "history", "Allergies:PCN", None)
        .unwrap();
    session
        .toggle_selection("background", "history", "Allergies:PCN", None)
        .unwrap();
    assert_eq!(session.active_patient().unwrap().allergies, vec!["PCN".to_string()]);

    session
        .toggle_selection("history", "history", "Allergies:PCN", None)
        .unwrap();
    assert_eq!(
        session.active_patient().unwrap().allergies,
        vec!["PCN".to_string()],
        "dị ứng vẫn còn được chọn ở khóa khác"
    );

    session
        .toggle_selection("background", "history", "Allergies:PCN", None)
        .unwrap();
    assert!(session.active_patient().unwrap().allergies.is_empty());
}

#[test]
fn removing_one_of_two_readings_keeps_the_other_value() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("vitals", "vitals", "HR:88", None)
        .unwrap();
    session
        .toggle_selection("vitals", "vitals", "HR:135", None)
        .unwrap();
    assert_eq!(session.active_patient().unwrap().vitals["HR"], "135");

    session
        .toggle_selection("vitals", "vitals", "HR:135", None)
        .unwrap();
    assert_eq!(session.active_patient().unwrap().vitals["HR"], "88");
}

#[test]
fn conflicts_are_reported_for_prospective_selections() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("status", "code", "DNR", None)
        .unwrap();
    let conflicts = session
        .conflicts_for("interventions", "escalation", "Code Blue")
        .unwrap();
    assert_eq!(conflicts, vec![SelectionKey::new("status", "code", "DNR")]);
    assert!(session
        .conflicts_for("interventions", "diagnostics", "EKG")
        .unwrap()
        .is_empty());
}

#[test]
fn summary_groups_selections_by_sbar_section() {
    let mut session = builtin_session(9);
    session
        .toggle_selection("status", "acuity", "Guarded", None)
        .unwrap();
    session
        .toggle_selection("history", "history", "CHF", None)
        .unwrap();
    session
        .toggle_selection("assessment", "cardiac", "Chest Pain", None)
        .unwrap();
    session
        .toggle_selection("interventions", "diagnostics", "EKG", None)
        .unwrap();

    let summary = session.handoff_summary().unwrap();
    assert_eq!(summary.situation[0].item, "Guarded");
    assert_eq!(summary.background[0].item, "CHF");
    assert_eq!(summary.assessment[0].item, "Chest Pain");
    assert_eq!(summary.recommendation[0].item, "EKG");
}

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use handoff_core::{ClinicalContext, EngineConfig, Patient, SelectionKey, TimeOfDay};
use handoff_engine::{derive, FixedClock, HandoffSession, KnowledgeBase, SelectionStore};
use proptest::prelude::*;

const POOL: &[(&str, &str, &str)] = &[
    ("assessment", "cardiac", "Chest Pain"),
    ("assessment", "cardiac", "Tachycardia"),
    ("assessment", "infection", "Sepsis"),
    ("assessment", "neuro", "Stroke Symptoms"),
    ("assessment", "safety", "Fall"),
    ("medications", "medications", "Morphine"),
    ("interventions", "diagnostics", "EKG"),
    ("status", "acuity", "Critical"),
    ("history", "history", "Allergies:PCN"),
    ("history", "history", "Allergies:Latex"),
];

fn key(index: usize) -> SelectionKey {
    let (category, section, item) = POOL[index];
    SelectionKey::new(category, section, item)
}

fn op() -> impl Strategy<Value = (usize, Option<String>)> {
    (0..POOL.len(), proptest::option::of("[a-z]{1,8}"))
}

fn session() -> HandoffSession {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 2, 23, 30, 0).unwrap());
    let mut session = HandoffSession::with_parts(
        KnowledgeBase::builtin(),
        EngineConfig::default(),
        Arc::new(clock),
    );
    session.add_patient(Patient::new("p-1", "Bed 1")).unwrap();
    session
}

fn replay(ops: &[(usize, Option<String>)]) -> HandoffSession {
    let mut session = session();
    for (index, note) in ops {
        session.toggle_key(key(*index), note.as_deref()).unwrap();
    }
    session
}

proptest! {
    #[test]
    fn toggles_behave_like_a_set_switch(ops in proptest::collection::vec(op(), 0..40)) {
        let session = replay(&ops);

        let mut model = BTreeSet::new();
        for (index, note) in &ops {
            let key = key(*index);
            if note.is_none() && model.contains(&key) {
                model.remove(&key);
            } else {
                model.insert(key);
            }
        }

        let keys: BTreeSet<SelectionKey> = session.selections().unwrap().keys().cloned().collect();
        prop_assert_eq!(session.selections().unwrap().len(), keys.len());
        prop_assert_eq!(keys, model);
    }

    #[test]
    fn suggestions_never_name_a_selected_item(ops in proptest::collection::vec(op(), 0..40)) {
        let session = replay(&ops);
        let selected = session.selections().unwrap().selected_names();
        for item in session.suggestions().unwrap().keys() {
            prop_assert!(!selected.contains(item), "{} is selected", item);
        }
    }

    #[test]
    fn derivation_is_deterministic(ops in proptest::collection::vec(op(), 0..40)) {
        let mut store = SelectionStore::new();
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        for (index, note) in &ops {
            store.toggle(key(*index), note.clone(), at);
        }
        let context = ClinicalContext::quiet(at, TimeOfDay::Morning);
        let knowledge = KnowledgeBase::builtin();
        let config = EngineConfig::default();

        let first = derive(&store, &context, &knowledge, &config);
        let second = derive(&store.clone(), &context, &knowledge, &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn allergies_mirror_selected_allergy_items(ops in proptest::collection::vec(op(), 0..40)) {
        let session = replay(&ops);
        let patient = session.active_patient().unwrap();

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for allergy in &patient.allergies {
            *counts.entry(allergy.as_str()).or_default() += 1;
        }
        prop_assert!(counts.values().all(|count| *count == 1));

        let expected: BTreeSet<String> = session
            .selections()
            .unwrap()
            .iter()
            .filter_map(|record| record.item.strip_prefix("Allergies:"))
            .map(str::to_string)
            .collect();
        let actual: BTreeSet<String> = patient.allergies.iter().cloned().collect();
        prop_assert_eq!(actual, expected);
    }
}

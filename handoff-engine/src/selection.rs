//! Authoritative selection map for one patient, plus the bookkeeping each
//! mutation applies to the patient record (timeline, allergies, measurements).

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use handoff_core::{FieldKind, ItemRef, Patient, SelectionKey, SelectionRecord, TimelineEntry};
use serde::{Deserialize, Serialize};

/// Outcome of one selection mutation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    Added,
    Updated,
    Removed,
    /// Only produced by select-if-absent paths (cascades, accepted suggestions).
    Unchanged,
}

impl ToggleAction {
    pub fn is_upsert(self) -> bool {
        matches!(self, ToggleAction::Added | ToggleAction::Updated)
    }
}

/// Selected items keyed by `(category, section, item)`.
///
/// Iteration follows key order, which makes every derived view deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStore {
    records: BTreeMap<SelectionKey, SelectionRecord>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// On/off switch. An absent key, or any call carrying a note, upserts
    /// (keeping the original timestamp); a present key without a note is
    /// removed. Returns the action together with the affected record.
    pub fn toggle(
        &mut self,
        key: SelectionKey,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> (ToggleAction, SelectionRecord) {
        let existing = self.records.get(&key).cloned();
        match (existing, note) {
            (Some(existing), None) => {
                self.records.remove(&key);
                (ToggleAction::Removed, existing)
            }
            (Some(existing), Some(note)) => {
                let record = SelectionRecord {
                    note: Some(note),
                    ..existing
                };
                self.records.insert(key, record.clone());
                (ToggleAction::Updated, record)
            }
            (None, note) => {
                let record = new_record(&key, note, now);
                self.records.insert(key, record.clone());
                (ToggleAction::Added, record)
            }
        }
    }

    /// Insert a record as-is, replacing any record under the same key.
    pub fn insert(&mut self, record: SelectionRecord) {
        self.records.insert(record.key(), record);
    }

    pub fn remove(&mut self, key: &SelectionKey) -> Option<SelectionRecord> {
        self.records.remove(key)
    }

    pub fn get(&self, key: &SelectionKey) -> Option<&SelectionRecord> {
        self.records.get(key)
    }

    pub fn contains(&self, key: &SelectionKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionRecord> {
        self.records.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &SelectionKey> {
        self.records.keys()
    }

    pub fn records(&self) -> Vec<SelectionRecord> {
        self.records.values().cloned().collect()
    }

    /// Drain every record, in key order.
    pub fn take_all(&mut self) -> Vec<SelectionRecord> {
        std::mem::take(&mut self.records).into_values().collect()
    }

    /// Names that must never be suggested: every selected item string, plus
    /// the main part of compound items.
    pub fn selected_names(&self) -> HashSet<String> {
        let mut names = HashSet::with_capacity(self.records.len() * 2);
        for record in self.records.values() {
            names.insert(record.item.clone());
            if let Ok(item) = record.item.parse::<ItemRef>() {
                if item.sub_option.is_some() {
                    names.insert(item.main);
                }
            }
        }
        names
    }

    /// A selected record whose item, or the main part of a compound item,
    /// equals `name` ignoring ASCII case.
    pub fn find_named(&self, name: &str) -> Option<&SelectionRecord> {
        self.records.values().find(|record| {
            record.item.eq_ignore_ascii_case(name)
                || record
                    .item
                    .parse::<ItemRef>()
                    .is_ok_and(|item| item.sub_option.is_some() && item.main.eq_ignore_ascii_case(name))
        })
    }

    /// The `window` most recently created items, newest first.
    pub fn recent_items(&self, window: usize) -> Vec<String> {
        let mut records: Vec<&SelectionRecord> = self.records.values().collect();
        records.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.key().cmp(&a.key()))
        });
        records
            .into_iter()
            .take(window)
            .map(|record| record.item.clone())
            .collect()
    }

    /// Records ordered by creation time, ties broken by key.
    pub fn chronological(&self) -> Vec<&SelectionRecord> {
        let mut records: Vec<&SelectionRecord> = self.records.values().collect();
        records.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.key().cmp(&b.key()))
        });
        records
    }
}

fn new_record(key: &SelectionKey, note: Option<String>, now: DateTime<Utc>) -> SelectionRecord {
    SelectionRecord {
        category: key.category.clone(),
        section: key.section.clone(),
        item: key.item.clone(),
        timestamp: now,
        note,
    }
}

/// Append the timeline event for an upsert, or prune entries for a removal.
pub(crate) fn sync_timeline(
    patient: &mut Patient,
    action: ToggleAction,
    record: &SelectionRecord,
    now: DateTime<Utc>,
) {
    match action {
        ToggleAction::Added | ToggleAction::Updated => {
            let verb = if action == ToggleAction::Added {
                "Selected"
            } else {
                "Updated"
            };
            patient.timeline.push(TimelineEntry {
                category: record.category.clone(),
                section: record.section.clone(),
                action: format!("{verb} {}", record.item),
                item: record.item.clone(),
                recorded_at: now,
            });
        }
        ToggleAction::Removed => prune_timeline(patient, &record.category, &record.item),
        ToggleAction::Unchanged => {}
    }
}

/// Best-effort cleanup: drops entries in the same category whose action text
/// mentions the item.
pub(crate) fn prune_timeline(patient: &mut Patient, category: &str, item: &str) {
    patient
        .timeline
        .retain(|entry| !(entry.category == category && entry.action.contains(item)));
}

/// Mirror `history`/`Allergies:<name>` selections into the allergy list.
///
/// `remaining` is the store after the mutation. An allergen stays listed while
/// any other selected record still names it.
pub(crate) fn sync_allergy(
    patient: &mut Patient,
    remaining: &SelectionStore,
    action: ToggleAction,
    record: &SelectionRecord,
) {
    let Some(allergen) = record_allergen(record) else {
        return;
    };

    match action {
        ToggleAction::Added | ToggleAction::Updated => {
            patient.add_allergy(&allergen);
        }
        ToggleAction::Removed => {
            let still_named = remaining
                .iter()
                .any(|other| record_allergen(other).as_deref() == Some(allergen.as_str()));
            if !still_named {
                patient.remove_allergy(&allergen);
            }
        }
        ToggleAction::Unchanged => {}
    }
}

fn record_allergen(record: &SelectionRecord) -> Option<String> {
    if record.section != "history" {
        return None;
    }
    allergy_name(&record.item)
}

fn allergy_name(item: &str) -> Option<String> {
    let parsed = item.parse::<ItemRef>().ok()?;
    if parsed.main != "Allergies" {
        return None;
    }
    parsed.sub_option
}

/// Value entered for a vitals/labs record: the note, else the sub-option.
pub(crate) fn measurement(record: &SelectionRecord) -> Option<(FieldKind, String, String)> {
    let kind = FieldKind::from_category(&record.category)?;
    let item = record.item.parse::<ItemRef>().ok()?;
    let value = record
        .note
        .as_deref()
        .map(str::trim)
        .filter(|note| !note.is_empty())
        .map(str::to_string)
        .or(item.sub_option)?;
    Some((kind, item.main, value))
}

/// Keep the patient's vitals/labs map in line with the current selections.
///
/// Removing the record that supplied a field's value falls back to the newest
/// remaining record for the same field, if any.
pub(crate) fn sync_measurement(
    patient: &mut Patient,
    remaining: &SelectionStore,
    action: ToggleAction,
    record: &SelectionRecord,
) {
    let Some((kind, field, value)) = measurement(record) else {
        return;
    };

    match action {
        ToggleAction::Added | ToggleAction::Updated => {
            patient.fields_mut(kind).insert(field, value);
        }
        ToggleAction::Removed => {
            let fallback = remaining.chronological().into_iter().rev().find_map(|other| {
                measurement(other)
                    .filter(|(other_kind, other_field, _)| *other_kind == kind && *other_field == field)
                    .map(|(_, _, other_value)| other_value)
            });
            let fields = patient.fields_mut(kind);
            if fields.get(&field) == Some(&value) {
                match fallback {
                    Some(other_value) => {
                        fields.insert(field, other_value);
                    }
                    None => {
                        fields.remove(&field);
                    }
                }
            }
        }
        ToggleAction::Unchanged => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 8, minute, 0).unwrap()
    }

    #[test]
    fn toggle_is_an_on_off_switch() {
        let mut store = SelectionStore::new();
        let key = SelectionKey::new("assessment", "cardiac", "Chest Pain");

        let (action, _) = store.toggle(key.clone(), None, at(0));
        assert_eq!(action, ToggleAction::Added);
        assert!(store.contains(&key));

        let (action, removed) = store.toggle(key.clone(), None, at(1));
        assert_eq!(action, ToggleAction::Removed);
        assert_eq!(removed.timestamp, at(0));
        assert!(store.is_empty());
    }

    #[test]
    fn note_upserts_and_keeps_original_timestamp() {
        let mut store = SelectionStore::new();
        let key = SelectionKey::new("assessment", "cardiac", "Chest Pain");
        store.toggle(key.clone(), None, at(0));

        let (action, record) = store.toggle(key.clone(), Some("radiating".into()), at(5));
        assert_eq!(action, ToggleAction::Updated);
        assert_eq!(record.timestamp, at(0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key).unwrap().note.as_deref(), Some("radiating"));
    }

    #[test]
    fn recent_items_are_newest_first() {
        let mut store = SelectionStore::new();
        store.toggle(SelectionKey::new("a", "s", "First"), None, at(0));
        store.toggle(SelectionKey::new("a", "s", "Second"), None, at(1));
        store.toggle(SelectionKey::new("a", "s", "Third"), None, at(2));

        assert_eq!(store.recent_items(2), vec!["Third", "Second"]);
    }

    #[test]
    fn selected_names_include_compound_main_part() {
        let mut store = SelectionStore::new();
        store.toggle(SelectionKey::new("history", "history", "Allergies:PCN"), None, at(0));
        let names = store.selected_names();
        assert!(names.contains("Allergies:PCN"));
        assert!(names.contains("Allergies"));
    }

    #[test]
    fn timeline_prune_matches_category_and_item_text() {
        let mut patient = Patient::new("p", "Patient");
        let record = SelectionRecord {
            category: "assessment".into(),
            section: "cardiac".into(),
            item: "Chest Pain".into(),
            timestamp: at(0),
            note: None,
        };
        let other = SelectionRecord {
            category: "labs".into(),
            item: "Chest Pain Panel".into(),
            ..record.clone()
        };
        sync_timeline(&mut patient, ToggleAction::Added, &record, at(0));
        sync_timeline(&mut patient, ToggleAction::Added, &other, at(1));
        sync_timeline(&mut patient, ToggleAction::Removed, &record, at(2));

        assert_eq!(patient.timeline.len(), 1);
        assert_eq!(patient.timeline[0].category, "labs");
    }

    #[test]
    fn measurement_prefers_note_over_sub_option() {
        let record = SelectionRecord {
            category: "vitals".into(),
            section: "vitals".into(),
            item: "HR:88".into(),
            timestamp: at(0),
            note: Some("135".into()),
        };
        assert_eq!(
            measurement(&record),
            Some((FieldKind::Vital, "HR".to_string(), "135".to_string()))
        );

        let bare = SelectionRecord {
            note: None,
            ..record.clone()
        };
        assert_eq!(measurement(&bare).unwrap().2, "88");

        let no_value = SelectionRecord {
            item: "HR".into(),
            note: None,
            ..record
        };
        assert_eq!(measurement(&no_value), None);
    }

    fn allergy_record(category: &str, item: &str) -> SelectionRecord {
        SelectionRecord {
            category: category.into(),
            section: "history".into(),
            item: item.into(),
            timestamp: at(0),
            note: None,
        }
    }

    #[test]
    fn allergy_stays_while_another_record_names_it() {
        let mut patient = Patient::new("p", "Patient");
        let mut store = SelectionStore::new();
        let first = allergy_record("history", "Allergies:PCN");
        let second = allergy_record("background", "Allergies:PCN");
        for record in [&first, &second] {
            store.toggle(record.key(), None, at(0));
            sync_allergy(&mut patient, &store, ToggleAction::Added, record);
        }
        assert_eq!(patient.allergies, vec!["PCN".to_string()]);

        store.toggle(first.key(), None, at(1));
        sync_allergy(&mut patient, &store, ToggleAction::Removed, &first);
        assert_eq!(patient.allergies, vec!["PCN".to_string()]);

        store.toggle(second.key(), None, at(2));
        sync_allergy(&mut patient, &store, ToggleAction::Removed, &second);
        assert!(patient.allergies.is_empty());
    }

    #[test]
    fn removing_a_measurement_falls_back_to_the_remaining_value() {
        let mut patient = Patient::new("p", "Patient");
        let mut store = SelectionStore::new();
        let older = SelectionKey::new("vitals", "vitals", "HR:88");
        let newer = SelectionKey::new("vitals", "vitals", "HR:135");

        let (_, record) = store.toggle(older.clone(), None, at(0));
        sync_measurement(&mut patient, &store, ToggleAction::Added, &record);
        let (_, record) = store.toggle(newer.clone(), None, at(1));
        sync_measurement(&mut patient, &store, ToggleAction::Added, &record);
        assert_eq!(patient.vitals.get("HR").map(String::as_str), Some("135"));

        let (action, removed) = store.toggle(newer, None, at(2));
        sync_measurement(&mut patient, &store, action, &removed);
        assert_eq!(patient.vitals.get("HR").map(String::as_str), Some("88"));

        let (action, removed) = store.toggle(older, None, at(3));
        sync_measurement(&mut patient, &store, action, &removed);
        assert!(!patient.vitals.contains_key("HR"));
    }

    #[test]
    fn removing_a_stale_measurement_keeps_the_current_value() {
        let mut patient = Patient::new("p", "Patient");
        let mut store = SelectionStore::new();
        let older = SelectionKey::new("vitals", "vitals", "HR:88");
        let (_, record) = store.toggle(older.clone(), None, at(0));
        sync_measurement(&mut patient, &store, ToggleAction::Added, &record);
        let (_, record) = store.toggle(SelectionKey::new("vitals", "vitals", "HR:135"), None, at(1));
        sync_measurement(&mut patient, &store, ToggleAction::Added, &record);

        let (action, removed) = store.toggle(older, None, at(2));
        sync_measurement(&mut patient, &store, action, &removed);
        assert_eq!(patient.vitals.get("HR").map(String::as_str), Some("135"));
    }

    #[test]
    fn find_named_matches_item_or_compound_main_part() {
        let mut store = SelectionStore::new();
        store.toggle(SelectionKey::new("history", "history", "Allergies:PCN"), None, at(0));
        store.toggle(SelectionKey::new("assessment", "general", "Fever"), None, at(1));

        assert_eq!(store.find_named("fever").unwrap().section, "general");
        assert_eq!(store.find_named("Allergies").unwrap().item, "Allergies:PCN");
        assert!(store.find_named("Sepsis").is_none());
    }
}

//! `HandoffSession`: the per-shift facade the UI talks to.
//!
//! Owns one selection store, suggestion map and dismissed-set per patient,
//! tracks which patient is active, and runs every mutation through the same
//! pipeline: store, timeline, allergy list, vitals/labs, recompute, and
//! finally cascade scheduling.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use handoff_core::{
    ClinicalContext, DismissalScope, EngineConfig, EngineSnapshot, HandoffError, Patient,
    SbarSummary, SelectionKey, SelectionRecord, SuggestionKey, SuggestionRecord,
};
use serde::{Deserialize, Serialize};

use crate::cascade::{CascadeQueue, CascadeReport};
use crate::clock::{Clock, SystemClock};
use crate::context::build_context;
use crate::deriver::{derive, SuggestionMap};
use crate::knowledge::KnowledgeBase;
use crate::selection::{
    measurement, prune_timeline, sync_allergy, sync_measurement, sync_timeline, SelectionStore,
    ToggleAction,
};

/// Result of a user-facing selection mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToggleOutcome {
    pub action: ToggleAction,
    pub key: SelectionKey,
    /// Selected keys that conflict with the key just upserted. Informational.
    pub conflicts: Vec<SelectionKey>,
    pub cascades_scheduled: usize,
}

#[derive(Debug, Clone)]
struct PatientSession {
    patient: Patient,
    selections: SelectionStore,
    suggestions: SuggestionMap,
    dismissed: BTreeSet<SuggestionKey>,
}

impl PatientSession {
    fn new(patient: Patient) -> Self {
        Self {
            patient,
            selections: SelectionStore::new(),
            suggestions: SuggestionMap::new(),
            dismissed: BTreeSet::new(),
        }
    }
}

enum Mutation {
    Toggle(Option<String>),
    /// Select-if-absent; used by cascades and accepted suggestions.
    Ensure,
}

struct Committed {
    action: ToggleAction,
    key: SelectionKey,
    scheduled: usize,
    refused: usize,
}

pub struct HandoffSession {
    patients: Vec<PatientSession>,
    active: Option<usize>,
    /// Bumped whenever the active patient identity changes.
    generation: u64,
    cascades: CascadeQueue,
    knowledge: Arc<KnowledgeBase>,
    config: EngineConfig,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for HandoffSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandoffSession")
            .field("patients", &self.patients.len())
            .field("active", &self.active)
            .field("generation", &self.generation)
            .field("pending_cascades", &self.cascades.len())
            .finish()
    }
}

impl Default for HandoffSession {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl HandoffSession {
    /// Session over the built-in knowledge base and the system clock.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_parts(KnowledgeBase::builtin(), config, Arc::new(SystemClock))
    }

    pub fn with_parts(
        knowledge: Arc<KnowledgeBase>,
        config: EngineConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            patients: Vec::new(),
            active: None,
            generation: 0,
            cascades: CascadeQueue::default(),
            knowledge,
            config,
            clock,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_patient(&self) -> Option<&Patient> {
        self.active
            .and_then(|index| self.patients.get(index))
            .map(|slot| &slot.patient)
    }

    pub fn patient(&self, index: usize) -> Option<&Patient> {
        self.patients.get(index).map(|slot| &slot.patient)
    }

    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter().map(|slot| &slot.patient)
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Register a patient. The first patient added becomes active.
    pub fn add_patient(&mut self, patient: Patient) -> Result<usize, HandoffError> {
        if self.patients.iter().any(|slot| slot.patient.id == patient.id) {
            return Err(HandoffError::DuplicatePatient(patient.id));
        }
        let index = self.patients.len();
        self.patients.push(PatientSession::new(patient));
        self.recompute(index);
        if self.active.is_none() {
            self.switch_to(Some(index));
        }
        tracing::debug!(index, patients = self.patients.len(), "patient added");
        Ok(index)
    }

    /// Drop a patient together with its selections, suggestions, dismissed-set
    /// and pending cascades.
    pub fn remove_patient(&mut self, index: usize) -> Result<Patient, HandoffError> {
        if index >= self.patients.len() {
            return Err(HandoffError::UnknownPatient(index));
        }
        let removed = self.patients.remove(index);
        self.cascades.discard_for(&removed.patient.id);

        match self.active {
            Some(active) if active == index => {
                let next = (!self.patients.is_empty()).then(|| index.min(self.patients.len() - 1));
                self.switch_to(next);
            }
            Some(active) if active > index => self.active = Some(active - 1),
            _ => {}
        }
        tracing::info!(index, patients = self.patients.len(), "patient removed");
        Ok(removed.patient)
    }

    pub fn set_active_patient(&mut self, index: usize) -> Result<(), HandoffError> {
        if index >= self.patients.len() {
            return Err(HandoffError::UnknownPatient(index));
        }
        if self.active != Some(index) {
            self.switch_to(Some(index));
        }
        Ok(())
    }

    fn switch_to(&mut self, index: Option<usize>) {
        self.active = index;
        self.generation += 1;
        tracing::info!(
            active = ?index,
            generation = self.generation,
            pending = self.cascades.len(),
            "active patient changed"
        );
    }

    fn active_patient_id(&self) -> Option<&str> {
        self.active_patient().map(|patient| patient.id.as_str())
    }

    fn active_slot(&self) -> Result<&PatientSession, HandoffError> {
        self.active
            .and_then(|index| self.patients.get(index))
            .ok_or(HandoffError::NoActivePatient)
    }

    fn active_slot_index(&self) -> Result<usize, HandoffError> {
        self.active
            .filter(|index| *index < self.patients.len())
            .ok_or(HandoffError::NoActivePatient)
    }

    /// On/off switch for the active patient. A supplied note always upserts.
    pub fn toggle_selection(
        &mut self,
        category: &str,
        section: &str,
        item: &str,
        note: Option<&str>,
    ) -> Result<ToggleOutcome, HandoffError> {
        let key = selection_key(category, section, item)?;
        self.toggle_key(key, note)
    }

    /// Same as [`toggle_selection`](Self::toggle_selection) for an already
    /// built key.
    pub fn toggle_key(
        &mut self,
        key: SelectionKey,
        note: Option<&str>,
    ) -> Result<ToggleOutcome, HandoffError> {
        let index = self.active_slot_index()?;
        self.run_user_mutation(index, key, Mutation::Toggle(note.map(str::to_string)))
    }

    /// Select the catalog entry a suggestion names, if it is not selected yet.
    ///
    /// A name already selected under any key, including as the main part of a
    /// compound item, is left alone and reported as `Unchanged`.
    pub fn accept_suggestion(&mut self, item: &str) -> Result<ToggleOutcome, HandoffError> {
        let index = self.active_slot_index()?;
        if let Some(existing) = self.patients[index].selections.find_named(item.trim()) {
            tracing::debug!("suggestion already selected");
            return Ok(ToggleOutcome {
                action: ToggleAction::Unchanged,
                key: existing.key(),
                conflicts: Vec::new(),
                cascades_scheduled: 0,
            });
        }
        let resolved = self
            .knowledge
            .catalog
            .resolve(item)
            .ok_or_else(|| HandoffError::UnresolvedItem(item.to_string()))?;
        tracing::debug!(strategy = ?resolved.strategy, "suggestion resolved");
        self.run_user_mutation(index, resolved.key, Mutation::Ensure)
    }

    fn run_user_mutation(
        &mut self,
        index: usize,
        key: SelectionKey,
        mutation: Mutation,
    ) -> Result<ToggleOutcome, HandoffError> {
        let conflicts = {
            let slot = &self.patients[index];
            if slot.selections.contains(&key) {
                Vec::new()
            } else {
                self.knowledge
                    .conflicts
                    .conflicting_items(&key, &slot.selections)
            }
        };
        if !conflicts.is_empty() {
            tracing::debug!(conflicts = conflicts.len(), "selection conflicts with existing items");
        }

        let committed = self.commit(index, key, mutation, 1);
        Ok(ToggleOutcome {
            action: committed.action,
            key: committed.key,
            conflicts,
            cascades_scheduled: committed.scheduled,
        })
    }

    /// Shared pipeline for user mutations and cascades.
    fn commit(
        &mut self,
        index: usize,
        key: SelectionKey,
        mutation: Mutation,
        depth: u32,
    ) -> Committed {
        let now = self.clock.now();
        let slot = &mut self.patients[index];
        let (action, record) = match mutation {
            Mutation::Toggle(note) => slot.selections.toggle(key, note, now),
            Mutation::Ensure => match slot.selections.get(&key) {
                Some(existing) => (ToggleAction::Unchanged, existing.clone()),
                None => slot.selections.toggle(key, None, now),
            },
        };

        if action != ToggleAction::Unchanged {
            sync_timeline(&mut slot.patient, action, &record, now);
            sync_allergy(&mut slot.patient, &slot.selections, action, &record);
            sync_measurement(&mut slot.patient, &slot.selections, action, &record);
            self.recompute(index);
        }
        tracing::debug!(
            category = %record.category,
            section = %record.section,
            ?action,
            depth,
            "selection committed"
        );

        let mut committed = Committed {
            action,
            key: record.key(),
            scheduled: 0,
            refused: 0,
        };
        if action.is_upsert() {
            self.schedule_cascades(index, &record, depth, &mut committed);
        }
        committed
    }

    fn schedule_cascades(
        &mut self,
        index: usize,
        record: &SelectionRecord,
        depth: u32,
        committed: &mut Committed,
    ) {
        let Some((kind, field, value)) = measurement(record) else {
            return;
        };
        let triggers = self.knowledge.evaluator().triggers_for(kind, &field, &value);
        if triggers.is_empty() {
            return;
        }

        let patient_id = self.patients[index].patient.id.clone();
        match self.cascades.schedule(
            &triggers,
            &patient_id,
            self.generation,
            depth,
            self.config.max_cascade_depth,
        ) {
            Ok(queued) => {
                committed.scheduled = queued;
                tracing::info!(%field, queued, depth, "cascades scheduled");
            }
            Err(refused) => committed.refused = refused,
        }
    }

    pub fn pending_cascades(&self) -> usize {
        self.cascades.len()
    }

    /// Apply deferred cascades until none remain. Each one is checked against
    /// the generation and patient it was scheduled for; chained cascades are
    /// bounded by `max_cascade_depth`.
    pub fn apply_pending_cascades(&mut self) -> CascadeReport {
        let mut report = CascadeReport::default();
        loop {
            let batch = self.cascades.drain();
            if batch.is_empty() {
                break;
            }
            let mut step = CascadeReport::default();
            for pending in batch {
                let index = match self.active {
                    Some(index) if pending.is_current(self.generation, self.active_patient_id()) => {
                        index
                    }
                    _ => {
                        step.dropped_stale += 1;
                        continue;
                    }
                };
                let committed = self.commit(index, pending.target, Mutation::Ensure, pending.depth + 1);
                step.dropped_depth += committed.refused;
                match committed.action {
                    ToggleAction::Unchanged => step.already_selected.push(committed.key),
                    _ => step.applied.push(committed.key),
                }
            }
            report.merge(step);
        }

        if !report.is_empty() {
            tracing::info!(
                applied = report.applied.len(),
                already_selected = report.already_selected.len(),
                dropped_stale = report.dropped_stale,
                dropped_depth = report.dropped_depth,
                "pending cascades processed"
            );
        }
        report
    }

    /// Hide a suggestion for the active patient. Returns `false` if the key
    /// was already dismissed.
    pub fn dismiss_suggestion(
        &mut self,
        key: impl Into<SuggestionKey>,
    ) -> Result<bool, HandoffError> {
        let index = self.active_slot_index()?;
        let inserted = self.patients[index].dismissed.insert(key.into());
        tracing::debug!(inserted, "suggestion dismissed");
        Ok(inserted)
    }

    /// Remove every selection of the active patient, undoing their timeline,
    /// allergy and measurement side effects, and reset the dismissed-set.
    /// Pending cascades for the patient are discarded.
    pub fn clear_all_selections(&mut self) -> Result<usize, HandoffError> {
        let index = self.active_slot_index()?;
        let slot = &mut self.patients[index];
        let removed = slot.selections.take_all();
        for record in &removed {
            prune_timeline(&mut slot.patient, &record.category, &record.item);
            sync_allergy(&mut slot.patient, &slot.selections, ToggleAction::Removed, record);
            sync_measurement(&mut slot.patient, &slot.selections, ToggleAction::Removed, record);
        }
        slot.dismissed.clear();
        let discarded = self.cascades.discard_for(&slot.patient.id);
        self.recompute(index);

        tracing::info!(removed = removed.len(), discarded, "selections cleared");
        Ok(removed.len())
    }

    pub fn selections(&self) -> Result<&SelectionStore, HandoffError> {
        self.active_slot().map(|slot| &slot.selections)
    }

    /// Full derived map, dismissed entries included.
    pub fn suggestions(&self) -> Result<&SuggestionMap, HandoffError> {
        self.active_slot().map(|slot| &slot.suggestions)
    }

    pub fn dismissed(&self) -> Result<&BTreeSet<SuggestionKey>, HandoffError> {
        self.active_slot().map(|slot| &slot.dismissed)
    }

    /// Suggestions not hidden by dismissal, highest score first.
    pub fn active_suggestions(&self) -> Result<Vec<SuggestionRecord>, HandoffError> {
        let slot = self.active_slot()?;
        let scope = self.config.dismissal_scope;
        let mut visible: Vec<SuggestionRecord> = slot
            .suggestions
            .values()
            .filter(|suggestion| !is_dismissed(&slot.dismissed, scope, suggestion))
            .cloned()
            .collect();
        visible.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.item.cmp(&b.item))
        });
        Ok(visible)
    }

    /// Currently selected keys that would conflict with the given selection.
    pub fn conflicts_for(
        &self,
        category: &str,
        section: &str,
        item: &str,
    ) -> Result<Vec<SelectionKey>, HandoffError> {
        let key = selection_key(category, section, item)?;
        let slot = self.active_slot()?;
        Ok(self
            .knowledge
            .conflicts
            .conflicting_items(&key, &slot.selections))
    }

    /// Active selections grouped by SBAR section, oldest first in each group.
    pub fn handoff_summary(&self) -> Result<SbarSummary, HandoffError> {
        let slot = self.active_slot()?;
        let mut summary = SbarSummary::default();
        for record in slot.selections.chronological() {
            summary.push(record.clone());
        }
        Ok(summary)
    }

    pub fn clinical_context(&self) -> Result<ClinicalContext, HandoffError> {
        let slot = self.active_slot()?;
        Ok(build_context(
            &slot.patient,
            &slot.selections,
            &self.knowledge.evaluator(),
            &self.config,
            self.clock.now(),
        ))
    }

    fn recompute(&mut self, index: usize) {
        let now = self.clock.now();
        let knowledge = Arc::clone(&self.knowledge);
        let Some(slot) = self.patients.get_mut(index) else {
            return;
        };
        let context = build_context(
            &slot.patient,
            &slot.selections,
            &knowledge.evaluator(),
            &self.config,
            now,
        );
        slot.suggestions = derive(&slot.selections, &context, &knowledge, &self.config);
    }

    /// State for the persistence layer, keyed by patient id.
    pub fn snapshot(&self) -> EngineSnapshot {
        let mut selected_items = BTreeMap::new();
        let mut related_items = BTreeMap::new();
        let mut dismissed_suggestions = BTreeMap::new();
        for slot in &self.patients {
            let id = slot.patient.id.clone();
            selected_items.insert(id.clone(), slot.selections.records());
            related_items.insert(id.clone(), slot.suggestions.values().cloned().collect());
            dismissed_suggestions.insert(id, slot.dismissed.iter().cloned().collect());
        }

        EngineSnapshot {
            generated_at: self.clock.now(),
            active_patient: self.active,
            patients: self.patients.iter().map(|slot| slot.patient.clone()).collect(),
            selected_items,
            related_items,
            dismissed_suggestions,
        }
    }

    /// Rebuild a session over the built-in knowledge base.
    pub fn restore(snapshot: EngineSnapshot, config: EngineConfig) -> Result<Self, HandoffError> {
        Self::restore_with_parts(snapshot, KnowledgeBase::builtin(), config, Arc::new(SystemClock))
    }

    /// Rebuild a session from a snapshot. Suggestions are re-derived; the
    /// stored `related_items` are ignored.
    pub fn restore_with_parts(
        snapshot: EngineSnapshot,
        knowledge: Arc<KnowledgeBase>,
        config: EngineConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, HandoffError> {
        let EngineSnapshot {
            active_patient,
            patients,
            mut selected_items,
            mut dismissed_suggestions,
            ..
        } = snapshot;

        let mut session = Self::with_parts(knowledge, config, clock);
        for patient in patients {
            if session.patients.iter().any(|slot| slot.patient.id == patient.id) {
                return Err(HandoffError::DuplicatePatient(patient.id));
            }
            let mut slot = PatientSession::new(patient);
            for record in selected_items.remove(&slot.patient.id).unwrap_or_default() {
                slot.selections.insert(record);
            }
            slot.dismissed = dismissed_suggestions
                .remove(&slot.patient.id)
                .unwrap_or_default()
                .into_iter()
                .collect();
            session.patients.push(slot);
        }

        if let Some(index) = active_patient {
            if index >= session.patients.len() {
                return Err(HandoffError::UnknownPatient(index));
            }
        }
        for index in 0..session.patients.len() {
            session.recompute(index);
        }
        session.active = active_patient;
        tracing::info!(patients = session.patients.len(), "session restored");
        Ok(session)
    }
}

fn selection_key(category: &str, section: &str, item: &str) -> Result<SelectionKey, HandoffError> {
    let (category, section, item) = (category.trim(), section.trim(), item.trim());
    if category.is_empty() || section.is_empty() || item.is_empty() {
        return Err(HandoffError::MalformedKey(format!("{category}-{section}-{item}")));
    }
    Ok(SelectionKey::new(category, section, item))
}

fn is_dismissed(
    dismissed: &BTreeSet<SuggestionKey>,
    scope: DismissalScope,
    suggestion: &SuggestionRecord,
) -> bool {
    match scope {
        DismissalScope::SuggestionKey => dismissed.contains(&suggestion.key),
        DismissalScope::ItemName => dismissed
            .iter()
            .any(|key| key.item_name() == suggestion.item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn session() -> HandoffSession {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap());
        HandoffSession::with_parts(
            KnowledgeBase::builtin(),
            EngineConfig::default(),
            Arc::new(clock),
        )
    }

    #[test]
    fn mutations_without_active_patient_are_rejected() {
        let mut session = session();
        let err = session
            .toggle_selection("assessment", "cardiac", "Chest Pain", None)
            .unwrap_err();
        assert_eq!(err, HandoffError::NoActivePatient);
        assert_eq!(session.dismiss_suggestion("a->b"), Err(HandoffError::NoActivePatient));
    }

    #[test]
    fn first_patient_becomes_active_and_duplicates_are_refused() {
        let mut session = session();
        assert_eq!(session.add_patient(Patient::new("p-1", "A")), Ok(0));
        assert_eq!(session.active_index(), Some(0));
        assert_eq!(session.generation(), 1);
        assert_eq!(
            session.add_patient(Patient::new("p-1", "B")),
            Err(HandoffError::DuplicatePatient("p-1".into()))
        );
        assert_eq!(session.set_active_patient(5), Err(HandoffError::UnknownPatient(5)));
    }

    #[test]
    fn blank_key_parts_are_malformed() {
        let mut session = session();
        session.add_patient(Patient::new("p-1", "A")).unwrap();
        assert!(matches!(
            session.toggle_selection("assessment", " ", "Chest Pain", None),
            Err(HandoffError::MalformedKey(_))
        ));
    }

    #[test]
    fn removing_a_patient_before_the_active_one_keeps_identity() {
        let mut session = session();
        session.add_patient(Patient::new("p-1", "A")).unwrap();
        session.add_patient(Patient::new("p-2", "B")).unwrap();
        session.set_active_patient(1).unwrap();
        let generation = session.generation();

        session.remove_patient(0).unwrap();
        assert_eq!(session.active_index(), Some(0));
        assert_eq!(session.active_patient().unwrap().id, "p-2");
        assert_eq!(session.generation(), generation);

        session.remove_patient(0).unwrap();
        assert_eq!(session.active_index(), None);
        assert!(session.generation() > generation);
    }

    #[test]
    fn upsert_reports_conflicts_without_blocking() {
        let mut session = session();
        session.add_patient(Patient::new("p-1", "A")).unwrap();
        session
            .toggle_selection("status", "code", "DNR", None)
            .unwrap();
        let outcome = session
            .toggle_selection("interventions", "escalation", "Code Blue", None)
            .unwrap();
        assert_eq!(outcome.action, ToggleAction::Added);
        assert_eq!(outcome.conflicts, vec![SelectionKey::new("status", "code", "DNR")]);
        assert_eq!(session.selections().unwrap().len(), 2);
    }
}

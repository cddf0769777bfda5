//! Deferred follow-up selections driven by abnormal vitals and labs.
//!
//! A cascade is queued when the triggering mutation commits and applied on a
//! later, explicit `apply_pending_cascades` step. Each pending entry remembers
//! the active-patient generation it was scheduled under; if the generation has
//! moved on by the time it runs, the entry is dropped.

use std::collections::VecDeque;

use handoff_core::{SelectionKey, TriggerSpec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCascade {
    pub patient_id: String,
    pub generation: u64,
    pub target: SelectionKey,
    /// 1 for cascades caused by a user mutation, +1 per chained cascade.
    pub depth: u32,
}

/// What happened to the cascades drained in one apply step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CascadeReport {
    pub applied: Vec<SelectionKey>,
    pub already_selected: Vec<SelectionKey>,
    pub dropped_stale: usize,
    pub dropped_depth: usize,
}

impl CascadeReport {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
            && self.already_selected.is_empty()
            && self.dropped_stale == 0
            && self.dropped_depth == 0
    }

    pub(crate) fn merge(&mut self, other: CascadeReport) {
        self.applied.extend(other.applied);
        self.already_selected.extend(other.already_selected);
        self.dropped_stale += other.dropped_stale;
        self.dropped_depth += other.dropped_depth;
    }
}

#[derive(Debug, Clone, Default)]
pub struct CascadeQueue {
    pending: VecDeque<PendingCascade>,
}

impl CascadeQueue {
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingCascade> {
        self.pending.iter()
    }

    /// Parse trigger strings and queue one cascade per well-formed trigger.
    /// Malformed triggers are skipped. Returns how many were queued or, when
    /// `depth` exceeds `max_depth`, `Err` with the number refused.
    pub fn schedule(
        &mut self,
        triggers: &[String],
        patient_id: &str,
        generation: u64,
        depth: u32,
        max_depth: u32,
    ) -> Result<usize, usize> {
        let targets: Vec<SelectionKey> = triggers
            .iter()
            .filter_map(|raw| match raw.parse::<TriggerSpec>() {
                Ok(trigger) => Some(trigger.target),
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed cascade trigger");
                    None
                }
            })
            .collect();

        if depth > max_depth {
            if !targets.is_empty() {
                tracing::warn!(
                    depth,
                    max_depth,
                    refused = targets.len(),
                    "cascade depth limit reached"
                );
            }
            return Err(targets.len());
        }

        let queued = targets.len();
        self.pending
            .extend(targets.into_iter().map(|target| PendingCascade {
                patient_id: patient_id.to_string(),
                generation,
                target,
                depth,
            }));
        Ok(queued)
    }

    /// Take everything queued so far; cascades queued while applying these
    /// land in a fresh batch.
    pub fn drain(&mut self) -> Vec<PendingCascade> {
        self.pending.drain(..).collect()
    }

    /// Drop pending cascades for one patient.
    pub fn discard_for(&mut self, patient_id: &str) -> usize {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.patient_id != patient_id);
        before - self.pending.len()
    }

    pub fn clear(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }
}

impl PendingCascade {
    /// The guard: same generation and same patient still active.
    pub fn is_current(&self, generation: u64, active_patient_id: Option<&str>) -> bool {
        self.generation == generation && active_patient_id == Some(self.patient_id.as_str())
    }
}

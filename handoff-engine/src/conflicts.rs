//! Mutually exclusive selections. Conflicts are reported, never enforced.

use handoff_core::{ItemRef, SelectionKey};

use crate::selection::SelectionStore;

pub(crate) fn builtin_conflicts() -> ConflictTable {
    ConflictTable::from_pairs(&[
        // Code status
        ("DNR", "Full Code"),
        ("DNR", "Code Blue"),
        ("DNR", "Resuscitation Team"),
        ("DNI", "Intubation"),
        ("DNI", "Ventilator"),
        ("Comfort Care", "Full Code"),
        ("Comfort Care", "Code Blue"),
        // Acuity
        ("Stable", "Critical"),
        ("Stable", "Guarded"),
        ("Guarded", "Critical"),
        // Diet
        ("NPO", "Regular Diet"),
        ("NPO", "Clear Liquid Diet"),
        ("NPO", "Full Liquid Diet"),
        ("NPO", "Diabetic Diet"),
        ("NPO", "Cardiac Diet"),
        ("NPO", "Renal Diet"),
        ("NPO", "Oral Fluid Encouragement"),
        ("Fluid Restriction", "Oral Fluid Encouragement"),
        // Activity
        ("Bed Rest", "Ambulate Independently"),
        ("Bed Rest", "Ambulation"),
        // Medication holds
        ("Heparin", "Hold Heparin"),
        ("Heparin", "Hold Anticoagulation"),
        ("Warfarin", "Hold Anticoagulation"),
        ("Insulin", "Hold Insulin"),
        ("Sliding Scale Insulin", "Hold Insulin"),
    ])
}

/// Symmetric pairs of item names that cannot both hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConflictTable {
    pairs: Vec<(String, String)>,
}

impl ConflictTable {
    pub fn builtin() -> &'static ConflictTable {
        &crate::knowledge::shared().conflicts
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            pairs: pairs
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }

    /// Compares main item names, ignoring ASCII case, in either order.
    pub fn conflicts(&self, a: &str, b: &str) -> bool {
        self.pairs.iter().any(|(left, right)| {
            (left.eq_ignore_ascii_case(a) && right.eq_ignore_ascii_case(b))
                || (left.eq_ignore_ascii_case(b) && right.eq_ignore_ascii_case(a))
        })
    }

    /// Currently selected keys that conflict with a prospective selection.
    pub fn conflicting_items(
        &self,
        prospective: &SelectionKey,
        selections: &SelectionStore,
    ) -> Vec<SelectionKey> {
        let candidate = main_name(&prospective.item);
        selections
            .keys()
            .filter(|key| *key != prospective)
            .filter(|key| self.conflicts(&candidate, &main_name(&key.item)))
            .cloned()
            .collect()
    }
}

fn main_name(item: &str) -> String {
    item.parse::<ItemRef>()
        .map(|parsed| parsed.main)
        .unwrap_or_else(|_| item.to_string())
}

//! Suggestion derivation: a pure function of the selection store and the
//! clinical context.
//!
//! The map is keyed by suggested item name, so each name carries at most one
//! record. When several sources offer the same name the highest score wins;
//! on equal scores the first offer (selection key order, then bundles, then
//! context rules) is kept.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use handoff_core::{
    Acuity, ClinicalContext, EngineConfig, ItemRef, SuggestionKey, SuggestionRecord, TimeOfDay,
};

use crate::knowledge::KnowledgeBase;
use crate::selection::SelectionStore;

pub type SuggestionMap = BTreeMap<String, SuggestionRecord>;

pub const ABNORMAL_VALUES_SOURCE: &str = "Abnormal Values";
pub const CRITICAL_ACUITY_SOURCE: &str = "Critical Acuity";
pub const NIGHT_SHIFT_SOURCE: &str = "Night Shift";

/// Medications that raise night-time fall risk.
const SEDATING_MEDICATIONS: &[&str] = &[
    "Morphine",
    "Hydromorphone",
    "Oxycodone",
    "Fentanyl",
    "Lorazepam",
    "Haloperidol",
    "Zolpidem",
    "Diphenhydramine",
];

struct ContextRule {
    item: &'static str,
    score: f64,
    source: &'static str,
    applies: fn(&ClinicalContext) -> bool,
}

const CONTEXT_RULES: &[ContextRule] = &[
    ContextRule {
        item: "Notify MD",
        score: 0.8,
        source: ABNORMAL_VALUES_SOURCE,
        applies: |context| context.has_abnormal_values,
    },
    ContextRule {
        item: "Repeat Vitals",
        score: 0.7,
        source: ABNORMAL_VALUES_SOURCE,
        applies: |context| context.has_abnormal_values,
    },
    ContextRule {
        item: "Critical Care Protocol",
        score: 0.9,
        source: CRITICAL_ACUITY_SOURCE,
        applies: |context| context.acuity == Acuity::Critical,
    },
    ContextRule {
        item: "Fall Precautions",
        score: 0.7,
        source: NIGHT_SHIFT_SOURCE,
        applies: |context| {
            context.time_of_day == TimeOfDay::Night
                && context.recent_items.iter().any(|item| is_sedating(item))
        },
    },
];

pub fn derive(
    selections: &SelectionStore,
    context: &ClinicalContext,
    knowledge: &KnowledgeBase,
    config: &EngineConfig,
) -> SuggestionMap {
    let mut deriver = Deriver {
        selected: selections.selected_names(),
        suggestions: SuggestionMap::new(),
    };

    for record in selections.iter() {
        for relation in knowledge.graph.related_for_item(&record.item) {
            if relation.score > config.suggestion_min_score {
                deriver.offer(&relation.name, relation.score, &record.item, record.timestamp);
            }
        }
    }

    for record in selections.iter() {
        let main = main_name(&record.item);
        for bundle in knowledge.bundles.matching(&main) {
            for item in &bundle.items {
                deriver.offer(item, bundle.score, &bundle.trigger, record.timestamp);
            }
        }
    }

    for rule in CONTEXT_RULES {
        if (rule.applies)(context) {
            deriver.offer(rule.item, rule.score, rule.source, context.evaluated_at);
        }
    }

    tracing::debug!(
        selections = selections.len(),
        suggestions = deriver.suggestions.len(),
        "derived suggestions"
    );
    deriver.suggestions
}

struct Deriver {
    selected: HashSet<String>,
    suggestions: SuggestionMap,
}

impl Deriver {
    fn offer(&mut self, item: &str, score: f64, source: &str, timestamp: DateTime<Utc>) {
        if self.selected.contains(item) {
            return;
        }
        if let Some(existing) = self.suggestions.get(item) {
            if existing.score >= score {
                return;
            }
        }
        self.suggestions.insert(
            item.to_string(),
            SuggestionRecord {
                key: SuggestionKey::for_pair(source, item),
                item: item.to_string(),
                score,
                source: source.to_string(),
                timestamp,
            },
        );
    }
}

fn main_name(item: &str) -> String {
    item.parse::<ItemRef>()
        .map(|parsed| parsed.main)
        .unwrap_or_else(|_| item.to_string())
}

fn is_sedating(item: &str) -> bool {
    let main = main_name(item);
    SEDATING_MEDICATIONS
        .iter()
        .any(|medication| medication.eq_ignore_ascii_case(&main))
}

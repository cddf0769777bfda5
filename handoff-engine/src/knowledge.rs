use std::sync::{Arc, LazyLock};

use crate::bundles::{builtin_bundles, BundleTable};
use crate::catalog::{builtin_catalog, ButtonCatalog};
use crate::conflicts::{builtin_conflicts, ConflictTable};
use crate::evaluator::AbnormalValueEvaluator;
use crate::relationships::RelationshipGraph;
use crate::thresholds::{builtin_table, ThresholdTable};

static BUILTIN: LazyLock<Arc<KnowledgeBase>> = LazyLock::new(|| {
    Arc::new(KnowledgeBase {
        graph: RelationshipGraph::from_builtin_rows(),
        thresholds: builtin_table(),
        bundles: builtin_bundles(),
        conflicts: builtin_conflicts(),
        catalog: builtin_catalog(),
    })
});

/// The single built-in instance that every table's `builtin()` borrows from.
pub(crate) fn shared() -> &'static KnowledgeBase {
    &BUILTIN
}

/// Read-only reference data consulted by every session.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub graph: RelationshipGraph,
    pub thresholds: ThresholdTable,
    pub bundles: BundleTable,
    pub conflicts: ConflictTable,
    pub catalog: ButtonCatalog,
}

impl KnowledgeBase {
    /// Shared handle to the built-in tables, loaded once per process.
    pub fn builtin() -> Arc<KnowledgeBase> {
        Arc::clone(&BUILTIN)
    }

    /// No relations, thresholds, bundles, conflicts or catalog entries.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn evaluator(&self) -> AbnormalValueEvaluator<'_> {
        AbnormalValueEvaluator::new(&self.thresholds)
    }
}

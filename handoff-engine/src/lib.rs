//! Selection, suggestion and cascade engine for SBAR shift handoff.
//!
//! [`HandoffSession`] is the entry point for UI code. The lower-level pieces
//! (threshold evaluation, relationship graph, pure suggestion derivation) are
//! public so they can be used and tested on their own.

mod relationship_data;

pub mod bundles;
pub mod cascade;
pub mod catalog;
pub mod clock;
pub mod conflicts;
pub mod context;
pub mod deriver;
pub mod evaluator;
pub mod knowledge;
pub mod relationships;
pub mod selection;
pub mod session;
pub mod thresholds;

pub use bundles::{BundleTable, ContextualBundle};
pub use cascade::{CascadeQueue, CascadeReport, PendingCascade};
pub use catalog::{ButtonCatalog, ButtonDef, ButtonGroup, ResolutionStrategy, ResolvedItem};
pub use clock::{Clock, FixedClock, SystemClock};
pub use conflicts::ConflictTable;
pub use context::build_context;
pub use deriver::{derive, SuggestionMap};
pub use evaluator::{AbnormalValueEvaluator, BreachSide, Evaluation};
pub use knowledge::KnowledgeBase;
pub use relationships::{Relation, RelationshipGraph};
pub use selection::{SelectionStore, ToggleAction};
pub use session::{HandoffSession, ToggleOutcome};
pub use thresholds::{ThresholdSpec, ThresholdTable};

/// Parse a snapshot produced by [`HandoffSession::snapshot`].
pub fn parse_snapshot(json: &str) -> Result<handoff_core::EngineSnapshot, handoff_core::HandoffError> {
    serde_json::from_str(json).map_err(|err| handoff_core::HandoffError::Parse(err.to_string()))
}

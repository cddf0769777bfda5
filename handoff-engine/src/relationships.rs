//! Static weighted relationship graph between clinical items.

use std::collections::HashMap;

use handoff_core::ItemRef;

use crate::relationship_data::RELATIONSHIP_DATA;

/// One outgoing edge: a related item and its authored affinity.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub name: String,
    pub score: f64,
}

/// Read-only map from an item name to its related items.
///
/// Edges keep their authored order so that derivation walks them
/// deterministically. Items without a row simply have no relations.
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraph {
    edges: HashMap<String, Vec<Relation>>,
}

impl RelationshipGraph {
    /// The built-in graph, shared with `KnowledgeBase::builtin`.
    pub fn builtin() -> &'static RelationshipGraph {
        &crate::knowledge::shared().graph
    }

    pub(crate) fn from_builtin_rows() -> Self {
        Self::from_rows(RELATIONSHIP_DATA)
    }

    /// Build a graph from owned rows. Scores are clamped into `[0, 1]` and
    /// self-edges are discarded.
    pub fn from_entries<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, R)>,
        R: IntoIterator<Item = (String, f64)>,
    {
        let mut edges: HashMap<String, Vec<Relation>> = HashMap::new();
        for (item, related) in rows {
            let bucket = edges.entry(item.clone()).or_default();
            for (name, score) in related {
                if name == item {
                    continue;
                }
                let score = if score.is_finite() {
                    score.clamp(0.0, 1.0)
                } else {
                    0.0
                };
                bucket.push(Relation { name, score });
            }
        }
        Self { edges }
    }

    pub(crate) fn from_rows(rows: &[(&str, &[(&str, f64)])]) -> Self {
        Self::from_entries(rows.iter().map(|(item, related)| {
            (
                item.to_string(),
                related
                    .iter()
                    .map(|(name, score)| (name.to_string(), *score))
                    .collect::<Vec<_>>(),
            )
        }))
    }

    /// Relations configured for exactly this name.
    pub fn related(&self, item: &str) -> &[Relation] {
        self.edges.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Relations for a selected item, falling back to its main part when the
    /// item carries a sub-option (`Allergies:PCN` → `Allergies`).
    pub fn related_for_item(&self, item: &str) -> &[Relation] {
        let direct = self.related(item);
        if !direct.is_empty() {
            return direct;
        }
        match item.parse::<ItemRef>() {
            Ok(parsed) if parsed.sub_option.is_some() => self.related(&parsed.main),
            _ => &[],
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.edges.contains_key(item)
    }

    /// Number of items with configured relations.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Every distinct name appearing as a key or a related item.
    pub fn entity_count(&self) -> usize {
        let mut names: std::collections::HashSet<&str> =
            self.edges.keys().map(String::as_str).collect();
        for relations in self.edges.values() {
            names.extend(relations.iter().map(|relation| relation.name.as_str()));
        }
        names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_graph_covers_hundreds_of_entities() {
        let graph = RelationshipGraph::builtin();
        assert!(graph.len() > 100);
        assert!(graph.entity_count() > 300);
    }

    #[test]
    fn builtin_scores_are_in_unit_range_and_never_self_referential() {
        let graph = RelationshipGraph::builtin();
        for (item, relations) in &graph.edges {
            for relation in relations {
                assert!((0.0..=1.0).contains(&relation.score), "{item} -> {relation:?}");
                assert_ne!(&relation.name, item);
            }
        }
    }

    #[test]
    fn sub_option_falls_back_to_main_item() {
        let graph = RelationshipGraph::builtin();
        let relations = graph.related_for_item("Allergies:PCN");
        assert!(relations.iter().any(|relation| relation.name == "Allergy Band"));
        assert!(graph.related_for_item("Unknown Thing").is_empty());
    }

    #[test]
    fn custom_rows_are_clamped_and_drop_self_edges() {
        let graph = RelationshipGraph::from_entries(vec![(
            "A".to_string(),
            vec![
                ("A".to_string(), 0.9),
                ("B".to_string(), 1.7),
                ("C".to_string(), f64::NAN),
            ],
        )]);
        let relations = graph.related("A");
        assert_eq!(relations.len(), 2);
        assert_eq!(relations[0].score, 1.0);
        assert_eq!(relations[1].score, 0.0);
    }
}

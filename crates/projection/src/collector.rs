use crate::projector::reportable_ancestor;
use archview_entities::{EntityGraph, EntityId, RelationTarget};
use std::collections::HashMap;

/// Aggregation key for relations that project onto the same node pair.
/// Never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationKey {
    pub from: EntityId,
    pub to: EntityId,
}

/// Expand a relation target into its concrete candidates: a candidate set
/// verbatim (order preserved, no dedup), a single entity otherwise.
fn expand(target: &RelationTarget) -> &[EntityId] {
    match target {
        RelationTarget::Entity(id) => std::slice::from_ref(id),
        RelationTarget::Candidates(ids) => ids,
    }
}

/// Walk all in-scope entities and group their surviving relations by
/// projected (from, to) pair.
///
/// A relation survives when its source entity projects to a reportable
/// ancestor, the concrete target has a non-negative id, the target projects
/// as well, and the two projections differ (self-loops collapse to no edge,
/// which covers a member calling a sibling member of the same type). One
/// relation may land under several keys when its candidate set spans several
/// reportable targets. Group values are relation kinds in encounter order.
#[must_use]
pub fn collect(graph: &EntityGraph) -> HashMap<RelationKey, Vec<String>> {
    let mut groups: HashMap<RelationKey, Vec<String>> = HashMap::new();

    for entity in graph.entities() {
        if !entity.in_scope {
            continue;
        }
        // an unreportable source can never anchor an edge
        let Some(from) = reportable_ancestor(graph, entity.id) else {
            continue;
        };
        for relation in &entity.relations {
            for &candidate in expand(&relation.target) {
                if candidate < 0 {
                    continue;
                }
                let Some(to) = reportable_ancestor(graph, candidate) else {
                    continue;
                };
                if to == from {
                    continue;
                }
                groups
                    .entry(RelationKey { from, to })
                    .or_default()
                    .push(relation.kind.clone());
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use archview_entities::{kinds, Entity, EntityKind, Relation};

    fn type_entity(id: EntityId, name: &str) -> Entity {
        Entity::new(id, EntityKind::Type, name).with_stereotype("class")
    }

    fn key(from: EntityId, to: EntityId) -> RelationKey {
        RelationKey { from, to }
    }

    #[test]
    fn test_expand_concrete_and_candidates() {
        assert_eq!(expand(&RelationTarget::Entity(5)), &[5]);
        assert_eq!(
            expand(&RelationTarget::Candidates(vec![3, 1, 3])),
            &[3, 1, 3]
        );
        assert!(expand(&RelationTarget::Candidates(Vec::new())).is_empty());
    }

    #[test]
    fn test_member_relations_project_to_type_pair() {
        let mut graph = EntityGraph::new();
        graph.add(type_entity(1, "TypeA"));
        graph.add(type_entity(2, "TypeB"));
        graph.add(Entity::new(3, EntityKind::Function, "func_a").with_parent(1));
        graph.add(Entity::new(4, EntityKind::Function, "func_b").with_parent(2));
        graph.add_relation(3, Relation::to_entity(kinds::CALL, 4));

        let groups = collect(&graph);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&key(1, 2)], vec![kinds::CALL.to_string()]);
    }

    #[test]
    fn test_sibling_member_call_collapses_to_no_edge() {
        let mut graph = EntityGraph::new();
        graph.add(type_entity(1, "TypeA"));
        graph.add(Entity::new(2, EntityKind::Function, "caller").with_parent(1));
        graph.add(Entity::new(3, EntityKind::Function, "callee").with_parent(1));
        graph.add_relation(2, Relation::to_entity(kinds::CALL, 3));

        assert!(collect(&graph).is_empty());
    }

    #[test]
    fn test_candidate_set_spans_multiple_keys() {
        let mut graph = EntityGraph::new();
        graph.add(type_entity(1, "Caller"));
        graph.add(type_entity(2, "ImplA"));
        graph.add(type_entity(3, "ImplB"));
        graph.add(Entity::new(4, EntityKind::Function, "overload_a").with_parent(2));
        graph.add(Entity::new(5, EntityKind::Function, "overload_b").with_parent(3));
        graph.add_relation(1, Relation::to_candidates(kinds::CALL, vec![4, 5]));

        let groups = collect(&graph);
        assert_eq!(groups.len(), 2);
        assert!(groups.contains_key(&key(1, 2)));
        assert!(groups.contains_key(&key(1, 3)));
    }

    #[test]
    fn test_negative_and_unresolvable_targets_are_skipped() {
        let mut graph = EntityGraph::new();
        graph.add(type_entity(1, "TypeA"));
        graph.add_relation(1, Relation::to_entity(kinds::USE, -1));
        graph.add_relation(1, Relation::to_entity(kinds::USE, 99));
        graph.add_relation(1, Relation::to_candidates(kinds::CALL, vec![-7, 88]));

        assert!(collect(&graph).is_empty());
    }

    #[test]
    fn test_out_of_scope_source_is_skipped() {
        let mut graph = EntityGraph::new();
        graph.add(type_entity(1, "Local"));
        graph.add(type_entity(2, "External").with_scope(false));
        graph.add_relation(2, Relation::to_entity(kinds::USE, 1));

        assert!(collect(&graph).is_empty());
    }

    #[test]
    fn test_relations_to_out_of_scope_targets_are_dropped() {
        let mut graph = EntityGraph::new();
        graph.add(type_entity(1, "Local"));
        graph.add(type_entity(2, "External").with_scope(false));
        graph.add_relation(1, Relation::to_entity(kinds::USE, 2));

        assert!(collect(&graph).is_empty());
    }

    #[test]
    fn test_group_preserves_relation_order() {
        let mut graph = EntityGraph::new();
        graph.add(type_entity(1, "TypeA"));
        graph.add(type_entity(2, "TypeB"));
        graph.add_relation(1, Relation::to_entity(kinds::CALL, 2));
        graph.add_relation(1, Relation::to_entity(kinds::CONTAIN, 2));
        graph.add_relation(1, Relation::to_entity(kinds::USE, 2));

        let groups = collect(&graph);
        assert_eq!(
            groups[&key(1, 2)],
            vec![
                kinds::CALL.to_string(),
                kinds::CONTAIN.to_string(),
                kinds::USE.to_string()
            ]
        );
    }
}

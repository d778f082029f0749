use archview_entities::{EntityGraph, EntityId};
use std::collections::HashSet;

/// Find the nearest reportable ancestor of `start`, including `start` itself.
///
/// Climbs the ownership chain until a reportable entity is found or the chain
/// ends. A found ancestor that is out of the analysis scope is discarded: it
/// must never anchor a node or an edge endpoint. Cyclic parent chains are
/// malformed input and resolve to `None`.
#[must_use]
pub fn reportable_ancestor(graph: &EntityGraph, start: EntityId) -> Option<EntityId> {
    let mut visited = HashSet::new();
    let mut current = graph.get(start)?;
    loop {
        if !visited.insert(current.id) {
            return None;
        }
        if current.kind.is_reportable() {
            return current.in_scope.then_some(current.id);
        }
        current = graph.get(current.parent?)?;
    }
}

/// Find the nearest reportable ancestor of `id`'s parent (exclusive form),
/// used to compute a node's `parentId`.
#[must_use]
pub fn reportable_owner(graph: &EntityGraph, id: EntityId) -> Option<EntityId> {
    let parent = graph.get(id)?.parent?;
    reportable_ancestor(graph, parent)
}

use crate::types::{Entity, EntityId, Relation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id-keyed entity store with insertion-ordered iteration.
///
/// The projection engine only reads the graph; mutation happens while the
/// analysis front-end builds it (and in tests). Iteration order is the order
/// entities were added, which is the graph's native order and the only order
/// the engine is allowed to assume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Entity>", into = "Vec<Entity>")]
pub struct EntityGraph {
    entities: Vec<Entity>,
    index: HashMap<EntityId, usize>,
}

impl EntityGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its id. Re-adding an id rebinds lookups to
    /// the newest entity.
    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.index.insert(id, self.entities.len());
        self.entities.push(entity);
        id
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index.get(&id).map(|&slot| &self.entities[slot])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.index.get(&id).map(|&slot| &mut self.entities[slot])
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Append a relation to `source`. Unknown sources are ignored.
    pub fn add_relation(&mut self, source: EntityId, relation: Relation) {
        if let Some(entity) = self.get_mut(source) {
            entity.relations.push(relation);
        }
    }

    /// Record `member` in its owner's declared-member lists, dispatching on
    /// the member's kind. Non-member kinds and unknown ids are ignored.
    pub fn add_member(&mut self, owner: EntityId, member: EntityId) {
        use crate::types::EntityKind;

        let Some(kind) = self.get(member).map(|e| e.kind) else {
            return;
        };
        let Some(owner) = self.get_mut(owner) else {
            return;
        };
        match kind {
            EntityKind::Function => owner.functions.push(member),
            EntityKind::Variable => owner.variables.push(member),
            _ => {}
        }
    }

    /// All entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl From<Vec<Entity>> for EntityGraph {
    fn from(entities: Vec<Entity>) -> Self {
        let index = entities
            .iter()
            .enumerate()
            .map(|(slot, entity)| (entity.id, slot))
            .collect();
        Self { entities, index }
    }
}

impl From<EntityGraph> for Vec<Entity> {
    fn from(graph: EntityGraph) -> Self {
        graph.entities
    }
}

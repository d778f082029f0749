use crate::element::ModelElement;
use crate::relation::ModelRelation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The projected architecture-level graph.
///
/// Keys are element/edge ids. Ordered maps keep serialization stable across
/// runs; with content-derived edge ids the whole model is reproducible
/// byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub nodes: BTreeMap<String, ModelElement>,
    pub edges: BTreeMap<String, ModelRelation>,
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_node(&mut self, element: ModelElement) {
        self.nodes.insert(element.id.clone(), element);
    }

    pub fn insert_edge(&mut self, relation: ModelRelation) {
        self.edges.insert(relation.id.clone(), relation);
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

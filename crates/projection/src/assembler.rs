use crate::collector::collect;
use crate::export::write_model;
use crate::prioritizer::{resolve, PriorityConfig};
use crate::projector::reportable_owner;
use crate::Result;
use archview_entities::{Entity, EntityGraph, EntityKind};
use archview_model::{Method, Model, ModelElement, Prop};
use std::path::Path;

/// The projection engine facade.
///
/// Stateless with respect to prior runs: every [`Projector::project`] call
/// rebuilds the model from scratch and leaves the input graph untouched.
#[derive(Debug, Clone, Default)]
pub struct Projector {
    config: PriorityConfig,
}

impl Projector {
    /// Engine with the default relation-priority policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom relation-priority policy.
    #[must_use]
    pub fn with_config(config: PriorityConfig) -> Self {
        Self { config }
    }

    /// Project `graph` into the architecture-level model.
    #[must_use]
    pub fn project(&self, graph: &EntityGraph) -> Model {
        log::info!("projecting entity graph ({} entities)", graph.len());
        let mut model = Model::new();

        for entity in graph.entities() {
            if entity.in_scope && entity.kind.is_reportable() {
                model.insert_node(build_element(graph, entity));
            }
        }

        for (key, kinds) in collect(graph) {
            for edge in resolve(&self.config, key, &kinds) {
                model.insert_edge(edge);
            }
        }

        log::info!(
            "projected model: {} nodes, {} edges",
            model.node_count(),
            model.edge_count()
        );
        model
    }

    /// Project `graph` and persist the model as pretty-printed JSON at `path`.
    pub fn dump(&self, graph: &EntityGraph, path: impl AsRef<Path>) -> Result<Model> {
        let model = self.project(graph);
        write_model(&model, path)?;
        Ok(model)
    }
}

/// Stereotype string a node carries as its `type`/`stereoType`.
fn element_type(entity: &Entity) -> String {
    match entity.kind {
        EntityKind::File | EntityKind::Package => entity.kind.as_str().to_string(),
        EntityKind::Type => entity
            .stereotype
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
        EntityKind::Function | EntityKind::Variable => "unknown".to_string(),
    }
}

fn build_element(graph: &EntityGraph, entity: &Entity) -> ModelElement {
    let parent_id = reportable_owner(graph, entity.id)
        .map_or_else(|| "-1".to_string(), |id| id.to_string());

    let mut element = ModelElement::new(
        entity.id.to_string(),
        element_type(entity),
        entity.name.clone(),
        parent_id,
    );

    if entity.kind.has_members() {
        // declared member ids that no longer resolve are omitted
        for &var_id in &entity.variables {
            if let Some(var) = graph.get(var_id) {
                element.props.push(Prop {
                    name: var.name.clone(),
                    description: None,
                    visibility: var.visibility.clone(),
                });
            }
        }
        for &func_id in &entity.functions {
            if let Some(func) = graph.get(func_id) {
                element.methods.push(Method::new(
                    func_id.to_string(),
                    func.name.clone(),
                    func.visibility.clone(),
                ));
            }
        }
    }

    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_prefers_stereotype() {
        let typed = Entity::new(1, EntityKind::Type, "Shape").with_stereotype("interface");
        assert_eq!(element_type(&typed), "interface");

        let bare = Entity::new(2, EntityKind::Type, "Opaque");
        assert_eq!(element_type(&bare), "unknown");

        let file = Entity::new(3, EntityKind::File, "a.java");
        assert_eq!(element_type(&file), "file");
    }

    #[test]
    fn test_build_element_skips_dangling_members() {
        let mut graph = EntityGraph::new();
        graph.add(Entity::new(1, EntityKind::Type, "TypeA").with_stereotype("class"));
        graph.add(Entity::new(2, EntityKind::Function, "real").with_parent(1));
        graph.add_member(1, 2);
        graph.get_mut(1).unwrap().functions.push(99);

        let entity = graph.get(1).unwrap().clone();
        let element = build_element(&graph, &entity);
        assert_eq!(element.methods.len(), 1);
        assert_eq!(element.methods[0].name, "real");
    }
}

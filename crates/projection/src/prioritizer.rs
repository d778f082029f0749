use crate::collector::RelationKey;
use archview_entities::kinds;
use archview_model::ModelRelation;
use std::collections::HashSet;

/// Label an ordinary relation group collapses into.
pub const DEPENDENCY: &str = "Dependency";

/// Priority assigned to structural relation kinds (lower wins).
const STRUCTURAL_PRIORITY: u32 = 1;

/// Priority assigned to every other kind.
const ORDINARY_PRIORITY: u32 = 100;

/// Immutable relation-priority policy.
///
/// Constructed once at startup and passed explicitly into [`resolve`]; there
/// is no process-wide table. The default structural set is containment,
/// inheritance and interface implementation.
#[derive(Debug, Clone)]
pub struct PriorityConfig {
    structural: HashSet<String>,
}

impl PriorityConfig {
    /// Policy with a custom structural kind set.
    pub fn new<I, S>(structural: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            structural: structural.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_structural(&self, kind: &str) -> bool {
        self.structural.contains(kind)
    }

    #[must_use]
    pub fn priority(&self, kind: &str) -> u32 {
        if self.is_structural(kind) {
            STRUCTURAL_PRIORITY
        } else {
            ORDINARY_PRIORITY
        }
    }
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self::new([kinds::CONTAIN, kinds::INHERIT, kinds::IMPLEMENT])
    }
}

/// Resolve one aggregated (from, to) group into its output edges.
///
/// If the group holds any structural relation, every structural instance
/// becomes its own edge retaining its original kind (repeated instances of
/// the same kind included) and ordinary relations in the group are
/// dropped. Otherwise the whole group collapses into a single edge labeled
/// [`DEPENDENCY`], templated from the first relation in the group.
#[must_use]
pub fn resolve(config: &PriorityConfig, key: RelationKey, kinds: &[String]) -> Vec<ModelRelation> {
    let structural: Vec<&str> = kinds
        .iter()
        .map(String::as_str)
        .filter(|kind| config.is_structural(kind))
        .collect();

    if structural.is_empty() {
        if kinds.is_empty() {
            return Vec::new();
        }
        return vec![ModelRelation::new(key.from, key.to, DEPENDENCY, 0)];
    }

    structural
        .into_iter()
        .enumerate()
        .map(|(ordinal, kind)| ModelRelation::new(key.from, key.to, kind, ordinal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn group(tags: &[&str]) -> Vec<String> {
        tags.iter().map(ToString::to_string).collect()
    }

    const KEY: RelationKey = RelationKey { from: 1, to: 2 };

    #[test]
    fn test_default_priorities() {
        let config = PriorityConfig::default();
        assert_eq!(config.priority("CONTAIN"), 1);
        assert_eq!(config.priority("INHERIT"), 1);
        assert_eq!(config.priority("IMPLEMENT"), 1);
        assert_eq!(config.priority("CALL"), 100);
        assert_eq!(config.priority("anything else"), 100);
    }

    #[test]
    fn test_ordinary_group_collapses_to_one_dependency() {
        let config = PriorityConfig::default();
        let edges = resolve(&config, KEY, &group(&["CALL", "USE", "CREATE"]));

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].relation_type, DEPENDENCY);
        assert_eq!(edges[0].name, DEPENDENCY);
        assert_eq!(edges[0].source_model_id, "1");
        assert_eq!(edges[0].target_model_id, "2");
    }

    #[test]
    fn test_structural_instances_keep_their_kinds() {
        let config = PriorityConfig::default();
        let edges = resolve(&config, KEY, &group(&["CONTAIN", "INHERIT", "IMPLEMENT"]));

        let types: Vec<&str> = edges.iter().map(|e| e.relation_type.as_str()).collect();
        assert_eq!(types, vec!["CONTAIN", "INHERIT", "IMPLEMENT"]);
    }

    #[test]
    fn test_structural_presence_drops_ordinary_relations() {
        let config = PriorityConfig::default();
        let edges = resolve(&config, KEY, &group(&["CALL", "INHERIT", "USE"]));

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].relation_type, "INHERIT");
    }

    #[test]
    fn test_duplicate_structural_instances_stay_distinct() {
        let config = PriorityConfig::default();
        let edges = resolve(&config, KEY, &group(&["CONTAIN", "CONTAIN"]));

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].relation_type, "CONTAIN");
        assert_eq!(edges[1].relation_type, "CONTAIN");
        assert_ne!(edges[0].id, edges[1].id);
    }

    #[test]
    fn test_custom_structural_set() {
        let config = PriorityConfig::new(["AGGREGATE"]);
        let edges = resolve(&config, KEY, &group(&["AGGREGATE", "CONTAIN"]));

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].relation_type, "AGGREGATE");
    }

    #[test]
    fn test_empty_group_yields_nothing() {
        let config = PriorityConfig::default();
        assert!(resolve(&config, KEY, &[]).is_empty());
    }
}

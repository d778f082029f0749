use serde::{Deserialize, Serialize};

/// Stable entity identity assigned by the analysis front-end.
///
/// Well-formed entities have non-negative ids; negative ids only ever appear
/// as unresolved relation targets and are skipped during projection.
pub type EntityId = i64;

/// Granularity of an entity in the source graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    File,
    Package,
    Type,
    Function,
    Variable,
}

impl EntityKind {
    /// Whether entities of this kind appear as nodes in the projected model.
    ///
    /// Only type-granularity entities are reportable; files are a distinct
    /// kind here even though the source graph models them as a subtype of
    /// type.
    #[must_use]
    pub const fn is_reportable(self) -> bool {
        matches!(self, Self::Type)
    }

    /// Whether entities of this kind declare function/variable members.
    #[must_use]
    pub const fn has_members(self) -> bool {
        matches!(self, Self::Type)
    }

    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Package => "package",
            Self::Type => "type",
            Self::Function => "function",
            Self::Variable => "variable",
        }
    }
}

/// Target of a relation: one concrete entity, or an unresolved candidate set
/// (e.g. the possible targets of an ambiguous overloaded call).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationTarget {
    Entity(EntityId),
    Candidates(Vec<EntityId>),
}

/// A directed, typed relation owned by its source entity.
///
/// Kinds are free-form string tags; the well-known ones live in [`crate::kinds`].
/// Relations are append-only: once added to an entity they are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub kind: String,
    pub target: RelationTarget,
}

impl Relation {
    pub fn new(kind: impl Into<String>, target: RelationTarget) -> Self {
        Self {
            kind: kind.into(),
            target,
        }
    }

    /// Relation to a single concrete entity.
    pub fn to_entity(kind: impl Into<String>, target: EntityId) -> Self {
        Self::new(kind, RelationTarget::Entity(target))
    }

    /// Relation to an unresolved candidate set (order preserved).
    pub fn to_candidates(kind: impl Into<String>, candidates: Vec<EntityId>) -> Self {
        Self::new(kind, RelationTarget::Candidates(candidates))
    }
}

/// A node of the source entity graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,

    pub kind: EntityKind,

    /// Raw name as resolved by the front-end
    pub name: String,

    /// Whether the entity falls inside the analysis scope. Out-of-scope
    /// entities never contribute nodes or edge endpoints.
    pub in_scope: bool,

    /// Owning entity, if any (a method's type, a type's file, ...).
    pub parent: Option<EntityId>,

    /// Stereotype for type entities ("class", "interface", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,

    /// Visibility for function/variable entities ("public", "private", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    /// Outgoing relations, in the order the front-end recorded them.
    #[serde(default)]
    pub relations: Vec<Relation>,

    /// Declared function members of a type entity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<EntityId>,

    /// Declared variable members of a type entity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<EntityId>,
}

impl Entity {
    /// Create an in-scope entity with no parent, relations or members.
    pub fn new(id: EntityId, kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            in_scope: true,
            parent: None,
            stereotype: None,
            visibility: None,
            relations: Vec::new(),
            functions: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Builder: set owning entity
    #[must_use]
    pub const fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Builder: set scope flag
    #[must_use]
    pub const fn with_scope(mut self, in_scope: bool) -> Self {
        self.in_scope = in_scope;
        self
    }

    /// Builder: set stereotype
    #[must_use]
    pub fn with_stereotype(mut self, stereotype: impl Into<String>) -> Self {
        self.stereotype = Some(stereotype.into());
        self
    }

    /// Builder: set visibility
    #[must_use]
    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = Some(visibility.into());
        self
    }
}

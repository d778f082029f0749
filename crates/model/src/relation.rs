use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Direction decoration on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectionType {
    SourceToTarget,
    TargetToSource,
    Bidirectional,
}

/// Link from an edge back to a location inside a model element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelReference {
    #[serde(rename = "type")]
    pub reference_type: String,
    pub main_id: String,
    pub internal_id: String,
}

/// An edge of the projected model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRelation {
    pub id: String,

    /// Resolved relation kind: a structural tag, or "Dependency".
    #[serde(rename = "type")]
    pub relation_type: String,

    pub source_model_id: String,

    pub target_model_id: String,

    /// Mirrors `type`.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_multiplicity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_multiplicity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<DirectionType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_type: Option<String>,

    /// Always false for emitted edges; self-loops are dropped during
    /// collection, before this layer.
    pub is_self: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<ModelReference>,
}

impl ModelRelation {
    /// Build an edge between two projected model ids.
    ///
    /// `ordinal` is the edge's index among edges emitted for the same
    /// (source, target) pair; it keeps repeated same-kind instances apart in
    /// the edge map.
    #[must_use]
    pub fn new(source_id: i64, target_id: i64, relation_type: impl Into<String>, ordinal: usize) -> Self {
        let relation_type = relation_type.into();
        let source_model_id = source_id.to_string();
        let target_model_id = target_id.to_string();
        Self {
            id: edge_id(&source_model_id, &target_model_id, &relation_type, ordinal),
            name: relation_type.clone(),
            relation_type,
            source_model_id,
            target_model_id,
            source_multiplicity: None,
            target_multiplicity: None,
            source_label: None,
            target_label: None,
            direction: None,
            call_type: None,
            is_self: false,
            reference: None,
        }
    }
}

/// Deterministic edge identity: lowercase hex SHA-256 over the logical edge
/// content. Identical input graphs therefore serialize to identical bytes.
#[must_use]
pub fn edge_id(source_id: &str, target_id: &str, relation_type: &str, ordinal: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source_id.as_bytes());
    hasher.update([0]);
    hasher.update(target_id.as_bytes());
    hasher.update([0]);
    hasher.update(relation_type.as_bytes());
    hasher.update([0]);
    hasher.update(ordinal.to_le_bytes());
    hex_encode_lower(&hasher.finalize())
}

fn hex_encode_lower(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().saturating_mul(2));
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

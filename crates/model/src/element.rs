use serde::{Deserialize, Serialize};

/// A declared variable member of a type node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prop {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// A parameter of a declared method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    pub name: String,
}

/// A declared function member of a type node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl Method {
    pub fn new(id: impl Into<String>, name: impl Into<String>, visibility: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parameters: Vec::new(),
            description: None,
            visibility,
        }
    }
}

/// A node of the projected model: a reportable, in-scope type entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelElement {
    pub id: String,

    /// Stereotype-derived element type ("class", "interface", ...).
    #[serde(rename = "type")]
    pub element_type: String,

    pub name: String,

    /// Id of the nearest reportable ancestor of this node's parent, or "-1".
    pub parent_id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub props: Vec<Prop>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,

    pub stereo_type: String,
}

impl ModelElement {
    pub fn new(
        id: impl Into<String>,
        element_type: impl Into<String>,
        name: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        let element_type = element_type.into();
        Self {
            id: id.into(),
            stereo_type: element_type.clone(),
            element_type,
            name: name.into(),
            parent_id: parent_id.into(),
            props: Vec::new(),
            methods: Vec::new(),
        }
    }
}

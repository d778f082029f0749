//! # Archview Model
//!
//! The architecture-level output model: one [`ModelElement`] per reportable
//! type, one [`ModelRelation`] per surviving projected relation. The wire
//! field names (`parentId`, `sourceModelId`, `stereoType`, ...) are part of
//! the output contract and fixed by serde renames.
//!
//! Edge ids are content-derived (see [`edge_id`]), so serializing the same
//! model twice produces identical bytes.

mod element;
mod model;
mod relation;

pub use element::{Method, ModelElement, Parameter, Prop};
pub use model::Model;
pub use relation::{edge_id, DirectionType, ModelReference, ModelRelation};

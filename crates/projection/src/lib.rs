//! # Archview Projection
//!
//! Projects a fine-grained entity/relation graph down to an
//! architecture-level model: nodes are type-granularity entities, edges are
//! deduplicated, priority-resolved relations between them.
//!
//! ## Architecture
//!
//! ```text
//! EntityGraph
//!     │
//!     ├──> Level Projector
//!     │      └─ entity ─> nearest in-scope reportable ancestor
//!     │
//!     ├──> Relation Collector
//!     │      ├─ expand ambiguous candidate targets
//!     │      ├─ project both endpoints, drop self-loops
//!     │      └─ group survivors by (from, to)
//!     │
//!     ├──> Relation Prioritizer
//!     │      ├─ structural kinds keep their identity, one edge per instance
//!     │      └─ ordinary groups collapse into one "Dependency" edge
//!     │
//!     └──> Model Assembler
//!            ├─ one node per reportable entity (members, projected parent)
//!            └─ one edge per prioritized relation
//! ```
//!
//! The whole projection is a single synchronous pass: it never mutates the
//! input graph and cannot fail on a well-formed one. Malformed pieces
//! (negative target ids, cyclic parent chains) are skipped, not raised. Only
//! the final JSON export is fallible.

mod assembler;
mod collector;
mod error;
mod export;
mod prioritizer;
mod projector;

pub use assembler::Projector;
pub use collector::{collect, RelationKey};
pub use error::{ExportError, Result};
pub use export::write_model;
pub use prioritizer::{resolve, PriorityConfig, DEPENDENCY};
pub use projector::{reportable_ancestor, reportable_owner};

//! Well-known relation kind tags.
//!
//! Relation kinds are free-form strings; these are the tags the analysis
//! front-end emits. Anything outside the structural set projects as a generic
//! dependency.

/// A type declares or contains another entity.
pub const CONTAIN: &str = "CONTAIN";

/// Class inheritance.
pub const INHERIT: &str = "INHERIT";

/// Interface implementation.
pub const IMPLEMENT: &str = "IMPLEMENT";

/// Function or method invocation.
pub const CALL: &str = "CALL";

/// Type or symbol usage.
pub const USE: &str = "USE";

/// Object instantiation.
pub const CREATE: &str = "CREATE";

/// Direct declared dependency.
pub const DEPEND: &str = "DEPEND";

/// Import of a foreign symbol or module.
pub const IMPORT: &str = "IMPORT";

/// Function parameter type reference.
pub const PARAMETER: &str = "PARAMETER";

/// Function return type reference.
pub const RETURN: &str = "RETURN";

/// Exception/throw type reference.
pub const THROW: &str = "THROW";

/// Type cast reference.
pub const CAST: &str = "CAST";

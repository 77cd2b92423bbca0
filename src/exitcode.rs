//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Ontology could not be loaded, lacks the root key, or is malformed
pub const FAILURE: i32 = 1;

/// Input/output error outside the ontology itself
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;

//! Domain layer: ontology entities and extraction logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod extractor;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use extractor::{
    ensure_ontology_root, extract_first_level_children, extract_official_children,
    extract_supplementary_children,
};

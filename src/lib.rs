//! Extract first-level privacy data-type categories from a taxonomy ontology.
//!
//! The ontology holds two branches, the official WeChat mini-program privacy
//! interfaces and a supplementary taxonomy. Their immediate children are
//! summarized and written out as JSON, a plain-text name list and CSV lines.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

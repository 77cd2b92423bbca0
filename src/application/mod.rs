//! Application layer: services and report rendering
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod report;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, LoadError};
pub use error_ext::IoResultExt;

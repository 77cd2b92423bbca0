//! Application services
//!
//! Concrete service implementations around the extraction core.
//! Services depend on the `FileSystem` boundary trait but are themselves
//! concrete structs, not traits.

mod export;
mod loader;

pub use export::ExportService;
pub use loader::LoaderService;

//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and the host
//! build system or storage. Each port is a trait implemented by adapters in
//! the infrastructure layer.

mod build_config_repository;
mod file_system;
mod module_context;

pub use build_config_repository::{BuildConfigError, BuildConfigRepository};
pub use file_system::{FileSystem, FileSystemError};
pub use module_context::ModuleContext;

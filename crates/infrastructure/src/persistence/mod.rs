//! File-based persistence adapters.

mod build_config_repository;
mod file_system;

pub use build_config_repository::{ConfigFormat, FileBuildConfigRepository};
pub use file_system::TokioFileSystem;

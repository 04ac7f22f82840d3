//! Blaster Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::{CollectingModuleContext, PropertyError};
pub use persistence::{ConfigFormat, FileBuildConfigRepository, TokioFileSystem};
pub use serialization::{
    SerializationError, build_config_from_json, build_config_from_yaml, from_json_bytes,
    to_json_stable,
};

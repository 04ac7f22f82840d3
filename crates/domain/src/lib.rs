//! Blaster Domain - Core types
//!
//! This crate defines the vendor configuration model consumed by the
//! variable expander. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod vendor;

pub use error::{DomainError, DomainResult};
pub use vendor::{BuildConfig, VariableSource, VendorConfig};

//! Adapters implementing the host-facing ports.

mod module_context;

pub use module_context::{CollectingModuleContext, PropertyError};

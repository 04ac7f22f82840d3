//! Application use cases (plugin policy and orchestration).

mod expand_blaster_variables;
mod load_build_config;

pub use expand_blaster_variables::*;
pub use load_build_config::*;

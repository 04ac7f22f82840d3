//! Variable expansion module
//!
//! Provides scanning and expansion of `$(name)` placeholders in strings.
//!
//! # Usage
//!
//! ```
//! use blaster_application::variable_expander::expand;
//!
//! let out = expand("out/$(arch)/lib", |name| Ok(name.to_uppercase())).unwrap();
//! assert_eq!(out, "out/ARCH/lib");
//! ```

pub mod engine;
mod error;
pub mod parser;

pub use engine::{EscapeMode, expand, expand_preserving_escapes, expand_with_mode};
pub use error::ExpandError;
pub use parser::{Placeholder, Token, parse_placeholders, placeholder_names};

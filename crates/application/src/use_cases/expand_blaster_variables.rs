//! Expand vendor variables in module properties.
//!
//! The plugin resolves only the names its vendor namespace binds. Every other
//! placeholder is written back as `$(name)` so a later expansion pass owned by
//! the host can resolve it, and `$$` escapes are kept for that pass too.

use blaster_domain::VariableSource;

use crate::ports::ModuleContext;
use crate::variable_expander::{ExpandError, expand_preserving_escapes};

/// Vendor namespace read by the blaster plugin.
pub const BLASTER_VARS_PLUGIN: &str = "blasterVarsPlugin";

/// Builds a name handler that substitutes bound names and re-emits the rest.
///
/// Bound values are returned as-is and never scanned again.
pub fn defer_unbound<S>(source: &S) -> impl FnMut(&str) -> Result<String, ExpandError> + '_
where
    S: VariableSource + ?Sized,
{
    move |name| Ok(lookup(source, name).unwrap_or_else(|| deferred_placeholder(name)))
}

fn lookup<S>(source: &S, name: &str) -> Option<String>
where
    S: VariableSource + ?Sized,
{
    source.is_set(name).then(|| source.value(name))
}

fn deferred_placeholder(name: &str) -> String {
    format!("$({name})")
}

/// Outcome of expanding one string against a vendor namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The expanded string.
    pub output: String,

    /// Names that were replaced by their values, in order of appearance.
    pub substituted: Vec<String>,

    /// Names left as `$(name)` for a later pass, in order of appearance.
    pub deferred: Vec<String>,
}

impl Expansion {
    /// Returns true if no placeholder was deferred.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.deferred.is_empty()
    }
}

/// Expands strings against a single variable source with deferred resolution.
#[derive(Debug, Clone)]
pub struct VendorVariableExpander<S> {
    source: S,
}

impl<S: VariableSource> VendorVariableExpander<S> {
    /// Creates an expander reading from `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Expands `input`, recording which names were substituted or deferred.
    ///
    /// # Errors
    /// Returns the scan error if `input` is malformed.
    pub fn expand(&self, input: &str) -> Result<Expansion, ExpandError> {
        let mut substituted = Vec::new();
        let mut deferred = Vec::new();

        let output = expand_preserving_escapes(input, |name| {
            Ok(match lookup(&self.source, name) {
                Some(value) => {
                    substituted.push(name.to_string());
                    value
                }
                None => {
                    deferred.push(name.to_string());
                    deferred_placeholder(name)
                }
            })
        })?;

        Ok(Expansion {
            output,
            substituted,
            deferred,
        })
    }
}

/// Expands `input` against the vendor variables in `namespace`.
///
/// On malformed input the failure is reported through
/// [`ModuleContext::property_error`] as `"<input>: <error>"` and the result
/// is the empty string; partial expansions are never returned.
pub fn expand_vendor_variables<C>(ctx: &mut C, namespace: &str, input: &str) -> String
where
    C: ModuleContext + ?Sized,
{
    let result = VendorVariableExpander::new(ctx.vendor_config(namespace)).expand(input);

    match result {
        Ok(expansion) => {
            if !expansion.is_complete() {
                tracing::debug!(
                    module = ctx.module_name(),
                    namespace,
                    deferred = ?expansion.deferred,
                    "left unbound variables for a later pass"
                );
            }
            expansion.output
        }
        Err(err) => {
            let message = format!("{input}: {err}");
            tracing::warn!(module = ctx.module_name(), %message, "property expansion failed");
            ctx.property_error(message);
            String::new()
        }
    }
}

/// Expands `input` against the [`BLASTER_VARS_PLUGIN`] namespace.
pub fn expand_blaster_variables<C>(ctx: &mut C, input: &str) -> String
where
    C: ModuleContext + ?Sized,
{
    expand_vendor_variables(ctx, BLASTER_VARS_PLUGIN, input)
}

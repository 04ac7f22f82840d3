//! Variable expansion engine
//!
//! Replaces each `$(name)` with whatever the caller's name handler returns.

use super::error::ExpandError;
use super::parser::{Token, parse_placeholders};

/// How `$$` escapes are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// `$$` becomes `$`. Use for the final pass.
    #[default]
    Strip,

    /// `$$` stays `$$`, so the output can be fed to another pass.
    Preserve,
}

impl EscapeMode {
    const fn replacement(self) -> &'static str {
        match self {
            Self::Strip => "$",
            Self::Preserve => "$$",
        }
    }
}

/// Expands every placeholder in `input`, stripping `$$` escapes.
///
/// The handler receives each name in order of appearance and returns the text
/// to splice in. Returned text is not scanned again.
///
/// # Examples
///
/// ```
/// use blaster_application::variable_expander::{ExpandError, expand};
///
/// let out = expand("$(a)-$$", |name| Ok(format!("<{name}>"))).unwrap();
/// assert_eq!(out, "<a>-$");
///
/// let err = expand("$(a", |_| Ok(String::new())).unwrap_err();
/// assert_eq!(err, ExpandError::MissingCloseParen);
/// ```
///
/// # Errors
/// Returns the scan error for malformed input, or the first error the handler
/// returns. No partial output is produced.
pub fn expand<F>(input: &str, handler: F) -> Result<String, ExpandError>
where
    F: FnMut(&str) -> Result<String, ExpandError>,
{
    expand_with_mode(input, EscapeMode::Strip, handler)
}

/// Like [`expand`], but keeps `$$` escapes intact for a later pass.
///
/// # Errors
/// Same as [`expand`].
pub fn expand_preserving_escapes<F>(input: &str, handler: F) -> Result<String, ExpandError>
where
    F: FnMut(&str) -> Result<String, ExpandError>,
{
    expand_with_mode(input, EscapeMode::Preserve, handler)
}

/// Expands `input` with an explicit escape mode.
///
/// # Errors
/// Same as [`expand`].
pub fn expand_with_mode<F>(
    input: &str,
    mode: EscapeMode,
    mut handler: F,
) -> Result<String, ExpandError>
where
    F: FnMut(&str) -> Result<String, ExpandError>,
{
    let tokens = parse_placeholders(input)?;
    let mut result = String::with_capacity(input.len());

    for token in &tokens {
        match token {
            Token::Literal(span) => result.push_str(&input[span.clone()]),
            Token::Escape(_) => result.push_str(mode.replacement()),
            Token::Placeholder(placeholder) => result.push_str(&handler(&placeholder.name)?),
        }
    }

    Ok(result)
}

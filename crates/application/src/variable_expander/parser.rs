//! Placeholder scanner for `$(name)` syntax
//!
//! Splits a string into literal text, placeholders and `$$` escapes.
//!
//! Grammar:
//! - `$(NAME)` is a placeholder. `NAME` is everything up to the first `)`,
//!   trimmed of surrounding whitespace. There is no nesting, so `$(a$(b)`
//!   names `a$(b`.
//! - `$$` is an escaped dollar sign.
//! - Any other `$` is an error.

use std::ops::Range;

use super::error::ExpandError;

/// A `$(name)` occurrence in a scanned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The variable name, without the markers and trimmed.
    pub name: String,

    /// Byte range of the whole `$(...)` token in the original string.
    pub span: Range<usize>,
}

impl Placeholder {
    /// Creates a new placeholder.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// A piece of a scanned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text copied through unchanged.
    Literal(Range<usize>),

    /// A `$(name)` placeholder.
    Placeholder(Placeholder),

    /// A `$$` escape.
    Escape(Range<usize>),
}

impl Token {
    /// Byte range of this token in the original string.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Literal(span) | Self::Escape(span) => span.clone(),
            Self::Placeholder(placeholder) => placeholder.span.clone(),
        }
    }
}

/// Scans `input` into tokens.
///
/// Concatenating the spans of the returned tokens reproduces `input`.
///
/// # Examples
///
/// ```
/// use blaster_application::variable_expander::parser::{Token, parse_placeholders};
///
/// let tokens = parse_placeholders("lib/$(ARCH)/$$x").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert!(matches!(&tokens[1], Token::Placeholder(p) if p.name == "ARCH"));
/// ```
///
/// # Errors
/// Returns an error for a lone trailing `$`, a `$` not followed by `(` or `$`,
/// or a `$(` without a closing `)`.
pub fn parse_placeholders(input: &str) -> Result<Vec<Token>, ExpandError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(offset) = input[pos..].find('$') {
        let start = pos + offset;
        if start > pos {
            tokens.push(Token::Literal(pos..start));
        }

        let after = &input[start + 1..];
        pos = match after.chars().next() {
            None => return Err(ExpandError::TrailingDollar),
            Some('$') => {
                tokens.push(Token::Escape(start..start + 2));
                start + 2
            }
            Some('(') => {
                // First ')' wins
                let close = after.find(')').ok_or(ExpandError::MissingCloseParen)?;
                let end = start + 1 + close + 1;
                let name = after[1..close].trim();
                tokens.push(Token::Placeholder(Placeholder::new(name, start..end)));
                end
            }
            Some(ch) if ch.is_whitespace() => return Err(ExpandError::UnexpectedCharacter(ch)),
            Some(_) => {
                let word_end = after.find(char::is_whitespace).unwrap_or(after.len());
                return Err(ExpandError::ExpectedParen {
                    word: after[..word_end].to_string(),
                });
            }
        };
    }

    if pos < input.len() {
        tokens.push(Token::Literal(pos..input.len()));
    }

    Ok(tokens)
}

/// Extracts the placeholder names in order of appearance.
///
/// # Errors
/// Returns the scan error if the input is malformed.
pub fn placeholder_names(input: &str) -> Result<Vec<String>, ExpandError> {
    Ok(parse_placeholders(input)?
        .into_iter()
        .filter_map(|token| match token {
            Token::Placeholder(placeholder) => Some(placeholder.name),
            Token::Literal(_) | Token::Escape(_) => None,
        })
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(input: &str) -> Vec<String> {
        placeholder_names(input).unwrap()
    }

    #[test]
    fn test_parse_simple_placeholder() {
        let tokens = parse_placeholders("$(name)").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Placeholder(Placeholder::new("name", 0..7))]
        );
    }

    #[test]
    fn test_parse_literal_only() {
        let tokens = parse_placeholders("plain/path").unwrap();
        assert_eq!(tokens, vec![Token::Literal(0..10)]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_placeholders("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_mixed_tokens() {
        let input = "a/$(B)/$$c";
        let tokens = parse_placeholders(input).unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Literal(0..2),
                Token::Placeholder(Placeholder::new("B", 2..6)),
                Token::Literal(6..7),
                Token::Escape(7..9),
                Token::Literal(9..10),
            ]
        );
    }

    #[test]
    fn test_spans_cover_input() {
        let input = "x$(a)$$y$(b)z";
        let rebuilt: String = parse_placeholders(input)
            .unwrap()
            .iter()
            .map(|token| &input[token.span()])
            .collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(names("$(a)$(b)$(c)"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(names("$(  spaced\t)"), vec!["spaced"]);
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(names("$()"), vec![""]);
    }

    #[test]
    fn test_first_close_paren_terminates() {
        let tokens = parse_placeholders("$(a$(b)c)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Placeholder(Placeholder::new("a$(b", 0..7)),
                Token::Literal(7..9),
            ]
        );
    }

    #[test]
    fn test_close_paren_outside_placeholder_is_literal() {
        assert_eq!(parse_placeholders("f(x)").unwrap(), vec![Token::Literal(0..4)]);
    }

    #[test]
    fn test_unicode_around_placeholder() {
        let input = "ü/$(名前)/é";
        let tokens = parse_placeholders(input).unwrap();
        let Token::Placeholder(placeholder) = &tokens[1] else {
            panic!("expected placeholder, got {:?}", tokens[1]);
        };
        assert_eq!(placeholder.name, "名前");
        assert_eq!(&input[placeholder.span.clone()], "$(名前)");
    }

    #[test]
    fn test_unterminated_placeholder() {
        assert_eq!(
            parse_placeholders("$(abc"),
            Err(ExpandError::MissingCloseParen)
        );
        assert_eq!(
            parse_placeholders("ok $(a) then $(b"),
            Err(ExpandError::MissingCloseParen)
        );
    }

    #[test]
    fn test_trailing_dollar() {
        assert_eq!(parse_placeholders("cost$"), Err(ExpandError::TrailingDollar));
    }

    #[test]
    fn test_dollar_before_whitespace() {
        assert_eq!(
            parse_placeholders("$ x"),
            Err(ExpandError::UnexpectedCharacter(' '))
        );
    }

    #[test]
    fn test_bare_dollar_name() {
        let err = parse_placeholders("$HOME/bin x").unwrap_err();
        assert_eq!(
            err,
            ExpandError::ExpectedParen {
                word: "HOME/bin".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "expected '(' after '$', did you mean $(HOME/bin)?"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ExpandError::TrailingDollar.to_string(),
            "expected character after '$'"
        );
        assert_eq!(ExpandError::MissingCloseParen.to_string(), "missing )");
    }
}

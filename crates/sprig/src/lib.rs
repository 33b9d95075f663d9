//! Sprig - lexical front end for the Sprig programming language.
//!
//! Sprig source is turned into classified, position-annotated tokens that a
//! parser can consume with one token of lookahead.
//!
//! # Example
//!
//! ```
//! use sprig::{lex, TokenKind};
//!
//! let tokens = lex("let x = 1").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens.len(), 7);
//! ```

use tracing::debug;

pub use sprig_lexer as lexer;

// Re-export commonly used types
pub use sprig_lexer::{
    next_token, tokenize, tokenize_strict, BuiltinType, Char, CharStream, Keyword, LexError,
    Position, Range, Stream, Symbol, Token, TokenKind, TokenStream,
};

/// Options for [`lex_with_config`].
#[derive(Debug, Clone, Default)]
pub struct LexConfig {
    /// Drop whitespace tokens.
    pub skip_whitespace: bool,
    /// Drop newline tokens.
    pub skip_newlines: bool,
    /// Keep unrecognized tokens instead of failing on the first one.
    pub lenient: bool,
}

impl LexConfig {
    /// Configuration for a parser that ignores layout.
    pub fn without_trivia() -> Self {
        Self {
            skip_whitespace: true,
            skip_newlines: true,
            lenient: false,
        }
    }
}

/// Lex Sprig source, failing on the first unrecognized token.
///
/// Whitespace and newlines are kept.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    lex_with_config(source, &LexConfig::default())
}

/// Lex Sprig source with the given configuration.
///
/// # Example
///
/// ```
/// use sprig::{lex_with_config, LexConfig, TokenKind};
///
/// let tokens = lex_with_config("a\n+ b", &LexConfig::without_trivia()).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Identifier, TokenKind::BinaryOperator, TokenKind::Identifier]
/// );
/// ```
pub fn lex_with_config(source: &str, config: &LexConfig) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut skipped = 0usize;

    for token in TokenStream::from_source(source).into_tokens() {
        if !config.lenient {
            if let Some(err) = LexError::from_token(&token) {
                debug!(target: "sprig", error = %err, "Lexing failed");
                return Err(err);
            }
        }
        let skip = match token.kind {
            TokenKind::Whitespace => config.skip_whitespace,
            TokenKind::Newline => config.skip_newlines,
            _ => false,
        };
        if skip {
            skipped += 1;
        } else {
            tokens.push(token);
        }
    }

    debug!(target: "sprig", tokens = tokens.len(), skipped, "Lexed source");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_kinds(source: &str, config: &LexConfig) -> Vec<TokenKind> {
        lex_with_config(source, config)
            .expect(&format!("lex failed for: {}", source))
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_lex_keeps_trivia() {
        let tokens = lex("let x = 1\n").unwrap();
        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens[7].kind, TokenKind::Newline);
    }

    #[test]
    fn test_lex_is_strict() {
        let err = lex("let x = @").unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                ch: '@',
                line: 1,
                column: 9
            }
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex("\"abc").unwrap_err();
        assert_eq!(err, LexError::UnexpectedEndOfInput { line: 1, column: 5 });
        assert_eq!(err.to_string(), "Unexpected end of input at line 1, column 5");
    }

    #[test]
    fn test_lenient() {
        let config = LexConfig {
            lenient: true,
            ..LexConfig::default()
        };
        assert_eq!(
            lex_kinds("a@", &config),
            vec![TokenKind::Identifier, TokenKind::Unrecognized]
        );
    }

    #[test]
    fn test_skip_whitespace_only() {
        let config = LexConfig {
            skip_whitespace: true,
            ..LexConfig::default()
        };
        assert_eq!(
            lex_kinds("a = b\nc", &config),
            vec![
                TokenKind::Identifier,
                TokenKind::AssignmentOperator,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_without_trivia() {
        assert_eq!(
            lex_kinds(
                "while x {\r\n  x = x - 1\r\n}",
                &LexConfig::without_trivia()
            ),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::LBrace,
                TokenKind::Identifier,
                TokenKind::AssignmentOperator,
                TokenKind::Identifier,
                TokenKind::BinaryOperator,
                TokenKind::Number,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn test_positions_survive_filtering() {
        let tokens = lex_with_config("a\n  b", &LexConfig::without_trivia()).unwrap();
        assert_eq!(tokens[1].lexeme, "b");
        assert_eq!(tokens[1].start(), Position::new(2, 2, 4));
    }

    #[test]
    fn test_empty_source() {
        assert!(lex("").unwrap().is_empty());
    }
}
